pub mod inventory_log;
