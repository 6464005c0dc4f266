pub mod brand;
