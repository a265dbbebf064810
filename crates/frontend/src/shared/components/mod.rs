pub mod card;
pub mod section_title;
pub mod ui;

pub use card::Card;
pub use section_title::SectionTitle;
