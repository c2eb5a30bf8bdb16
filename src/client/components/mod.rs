pub mod client_info_form;
pub mod file_upload_form;
pub mod login_prompt;
pub mod navbar;
pub mod not_found;
pub mod page;
pub mod report_generator;
pub mod tax_calculator_demo;

pub use client_info_form::ClientInfoForm;
pub use file_upload_form::FileUploadForm;
pub use login_prompt::LoginPrompt;
pub use navbar::Navbar;
pub use not_found::NotFoundNotice;
pub use page::Page;
pub use report_generator::ReportGenerator;
pub use tax_calculator_demo::TaxCalculatorDemoExperience;
