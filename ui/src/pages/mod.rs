pub mod home;
pub mod not_found;
pub mod property_detail;
pub mod upload_property;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use property_detail::PropertyDetailPage;
pub use upload_property::UploadPropertyPage;
