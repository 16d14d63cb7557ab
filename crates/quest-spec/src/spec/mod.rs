pub mod group;
pub mod input;
pub mod page;
pub mod questionnaire;

pub use group::Group;
pub use input::{HAlign, Input, InputType, RadioOption, RESERVED_NAMES};
pub use page::Page;
pub use questionnaire::{Questionnaire, Survey};
