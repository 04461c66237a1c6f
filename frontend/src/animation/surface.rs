use once_cell::unsync::OnceCell;
use web_sys::HtmlElement;

use crate::animation::progress::HeroFrame;
use crate::error::LandingError;

/// Anything whose inline style can be written.
pub trait StyleTarget {
    fn set_style(&self, property: &str, value: &str) -> Result<(), LandingError>;
}

impl StyleTarget for HtmlElement {
    fn set_style(&self, property: &str, value: &str) -> Result<(), LandingError> {
        self.style()
            .set_property(property, value)
            .map_err(LandingError::dom)
    }
}

/// The five surfaces the hero animates. Any of them may be missing while
/// the section is still mounting.
pub struct HeroSurfaces<'a, T> {
    pub mask: Option<&'a T>,
    pub media: Option<&'a T>,
    pub title_top: Option<&'a T>,
    pub title_bottom: Option<&'a T>,
    pub caption: Option<&'a T>,
}

impl<'a, T> Default for HeroSurfaces<'a, T> {
    fn default() -> Self {
        Self {
            mask: None,
            media: None,
            title_top: None,
            title_bottom: None,
            caption: None,
        }
    }
}

/// Writes `frame` onto every surface that is present and returns how many
/// surfaces took all their writes.
pub fn apply_frame<T: StyleTarget>(frame: &HeroFrame, surfaces: &HeroSurfaces<'_, T>) -> usize {
    let title_opacity = frame.title_opacity.to_string();
    let writes: [(Option<&T>, &str, Vec<(&str, String)>); 5] = [
        (surfaces.mask, "mask", vec![("transform", frame.mask_transform())]),
        (surfaces.media, "media", vec![("transform", frame.media_transform())]),
        (
            surfaces.title_top,
            "title_top",
            vec![
                ("transform", frame.title_top_transform()),
                ("opacity", title_opacity.clone()),
            ],
        ),
        (
            surfaces.title_bottom,
            "title_bottom",
            vec![
                ("transform", frame.title_bottom_transform()),
                ("opacity", title_opacity),
            ],
        ),
        (
            surfaces.caption,
            "caption",
            vec![
                ("filter", frame.caption_filter()),
                ("opacity", frame.caption_opacity.to_string()),
                ("transform", frame.caption_transform()),
            ],
        ),
    ];

    let mut applied = 0;
    for (target, name, styles) in writes {
        let Some(target) = target else {
            continue;
        };
        let mut ok = true;
        for (property, value) in styles {
            if let Err(e) = target.set_style(property, &value) {
                log::warn!("hero surface {} rejected {}: {}", name, property, e);
                ok = false;
            }
        }
        if ok {
            applied += 1;
        }
    }
    applied
}

/// A handle looked up on first use and kept for the owner's lifetime.
/// Failed lookups are retried on the next call.
pub struct LazyTarget<T> {
    cell: OnceCell<T>,
}

impl<T> Default for LazyTarget<T> {
    fn default() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }
}

impl<T> LazyTarget<T> {
    pub fn get_or_resolve(&self, resolve: impl FnOnce() -> Option<T>) -> Option<&T> {
        self.cell.get_or_try_init(|| resolve().ok_or(())).ok()
    }

    #[cfg(test)]
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeroConfig;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct Recorder {
        writes: RefCell<Vec<(String, String)>>,
        reject: Option<&'static str>,
    }

    impl Recorder {
        fn rejecting(property: &'static str) -> Self {
            Self {
                reject: Some(property),
                ..Self::default()
            }
        }

        fn value(&self, property: &str) -> Option<String> {
            self.writes
                .borrow()
                .iter()
                .rev()
                .find(|(p, _)| p == property)
                .map(|(_, v)| v.clone())
        }
    }

    impl StyleTarget for Recorder {
        fn set_style(&self, property: &str, value: &str) -> Result<(), LandingError> {
            if self.reject == Some(property) {
                return Err(LandingError::Dom(format!("{property} is read-only")));
            }
            self.writes
                .borrow_mut()
                .push((property.to_string(), value.to_string()));
            Ok(())
        }
    }

    #[test]
    fn writes_every_surface_when_all_present() {
        let (mask, media, top, bottom, caption) = (
            Recorder::default(),
            Recorder::default(),
            Recorder::default(),
            Recorder::default(),
            Recorder::default(),
        );
        let frame = HeroFrame::at(0.5, &HeroConfig::default());
        let surfaces = HeroSurfaces {
            mask: Some(&mask),
            media: Some(&media),
            title_top: Some(&top),
            title_bottom: Some(&bottom),
            caption: Some(&caption),
        };

        assert_eq!(apply_frame(&frame, &surfaces), 5);
        assert_eq!(mask.value("transform").as_deref(), Some("scale(71)"));
        assert_eq!(top.value("transform").as_deref(), Some("translateY(-50vh)"));
        assert_eq!(bottom.value("transform").as_deref(), Some("translateY(50vh)"));
        assert_eq!(top.value("opacity").as_deref(), Some("0"));
        assert_eq!(caption.value("filter").as_deref(), Some("blur(0px)"));
        assert_eq!(caption.value("opacity").as_deref(), Some("1"));
        assert_eq!(caption.value("transform").as_deref(), Some("translateY(-20px)"));
        assert!(media
            .value("transform")
            .is_some_and(|t| t.starts_with("translate(-50%, -50%) scale(0.014")));
    }

    #[test]
    fn missing_surfaces_do_not_block_the_rest() {
        let top = Recorder::default();
        let caption = Recorder::default();
        let frame = HeroFrame::at(0.1, &HeroConfig::default());
        let surfaces = HeroSurfaces {
            title_top: Some(&top),
            caption: Some(&caption),
            ..HeroSurfaces::default()
        };

        assert_eq!(apply_frame(&frame, &surfaces), 2);
        assert!(top.value("transform").is_some());
        assert!(caption.value("filter").is_some());
    }

    #[test]
    fn no_surfaces_is_a_no_op() {
        let frame = HeroFrame::at(0.3, &HeroConfig::default());
        let surfaces: HeroSurfaces<'_, Recorder> = HeroSurfaces::default();
        assert_eq!(apply_frame(&frame, &surfaces), 0);
    }

    #[test]
    fn rejected_write_is_isolated_to_its_surface() {
        let mask = Recorder::rejecting("transform");
        let caption = Recorder::default();
        let frame = HeroFrame::at(0.0, &HeroConfig::default());
        let surfaces = HeroSurfaces {
            mask: Some(&mask),
            caption: Some(&caption),
            ..HeroSurfaces::default()
        };

        assert_eq!(apply_frame(&frame, &surfaces), 1);
        assert_eq!(caption.value("filter").as_deref(), Some("blur(4px)"));
    }

    #[test]
    fn lazy_target_resolves_once() {
        let lookups = Cell::new(0);
        let slot = LazyTarget::default();

        for _ in 0..3 {
            let found = slot.get_or_resolve(|| {
                lookups.set(lookups.get() + 1);
                Some("video")
            });
            assert_eq!(found, Some(&"video"));
        }
        assert_eq!(lookups.get(), 1);
    }

    #[test]
    fn lazy_target_retries_until_found() {
        let slot: LazyTarget<&str> = LazyTarget::default();
        assert_eq!(slot.get_or_resolve(|| None), None);
        assert!(slot.get().is_none());
        assert_eq!(slot.get_or_resolve(|| Some("video")), Some(&"video"));
        assert_eq!(slot.get(), Some(&"video"));
    }
}
