pub mod aggregate;
pub mod composition;
pub mod labels;
pub mod section_title;

pub use aggregate::{Menu, MenuId, MenuOption, MenuOptionId, MenuSection, MenuSectionId};
pub use composition::{CreateMenuRequest, MenuDraft};
pub use section_title::SectionTitle;
