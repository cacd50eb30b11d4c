pub mod layout;
pub mod property_card;
pub mod property_form;
pub mod property_tab_header;
pub mod toast;

pub use property_card::PropertyCard;
pub use property_form::PropertyUploadForm;
pub use property_tab_header::{PropertySection, PropertyTabHeader};
pub use toast::ToastContainer;
