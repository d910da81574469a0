//! Theme marker classes on the story container.

use bocadillo_core::{PlatformError, Theme};
use web_sys::Element;

use crate::dom::JsResultExt;

/// Replace whatever theme class the container has with `theme`'s.
pub fn apply_theme(story: &Element, theme: Theme) -> Result<(), PlatformError> {
    let classes = story.class_list();
    for class in Theme::ALL_CLASSES {
        classes.remove_1(class).or_platform("remove theme class")?;
    }
    classes
        .add_1(theme.class_name())
        .or_platform("add theme class")
}
