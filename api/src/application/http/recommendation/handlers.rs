pub mod get_form;
pub mod recommend;
