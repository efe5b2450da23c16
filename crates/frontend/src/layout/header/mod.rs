pub mod logout_confirm;
pub mod navigation;
