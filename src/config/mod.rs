//! Configuration module

mod site;

pub use site::LocaleConfig;
pub use site::PagesConfig;
pub use site::SiteConfig;
