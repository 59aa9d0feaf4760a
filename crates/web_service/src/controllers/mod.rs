pub mod system_controller;
pub mod ussd_controller;
