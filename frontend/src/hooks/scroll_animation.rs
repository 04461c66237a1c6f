use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};
use yew::prelude::*;

use crate::animation::frame_gate::FrameGate;
use crate::animation::progress::{HeroFrame, ScrollState};
use crate::animation::surface::{apply_frame, HeroSurfaces, LazyTarget};
use crate::config::HeroConfig;
use crate::error::{self, LandingError};
use crate::hooks::{viewport_size, WindowListener};

/// Handles for everything the hero sequence reads or writes.
#[derive(Clone, Default, PartialEq)]
pub struct HeroRefs {
    pub track: NodeRef,
    pub clip_mask: NodeRef,
    pub title_top: NodeRef,
    pub title_bottom: NodeRef,
    pub caption: NodeRef,
}

/// Turns scroll position into the hero's zoom, parting titles and caption
/// deblur. One instance lives per mounted hero section.
pub struct ScrollAnimator {
    refs: HeroRefs,
    config: HeroConfig,
    gate: RefCell<FrameGate<AnimationFrame>>,
    // the video nested in the mask; a JS handle, the DOM still owns the node
    media: LazyTarget<HtmlElement>,
}

impl ScrollAnimator {
    pub fn new(refs: HeroRefs, config: HeroConfig) -> Rc<Self> {
        Rc::new(Self {
            refs,
            config,
            gate: RefCell::new(FrameGate::new()),
            media: LazyTarget::default(),
        })
    }

    /// Scroll notification. Queues a frame unless one is already waiting.
    pub fn notify(self: &Rc<Self>) {
        let animator = Rc::clone(self);
        self.gate.borrow_mut().schedule_with(move || {
            request_animation_frame(move |_| animator.run_frame())
        });
    }

    fn run_frame(&self) {
        if !self.gate.borrow_mut().begin_frame() {
            return;
        }

        let state = match self.measure() {
            Ok(state) => state,
            Err(e) => {
                log::warn!("skipping hero frame: {}", e);
                return;
            }
        };
        let frame = HeroFrame::from_state(&state, &self.config);

        let mask = self.refs.clip_mask.cast::<HtmlElement>();
        let media = mask
            .as_ref()
            .and_then(|mask| self.media.get_or_resolve(|| find_media(mask)));
        let title_top = self.refs.title_top.cast::<HtmlElement>();
        let title_bottom = self.refs.title_bottom.cast::<HtmlElement>();
        let caption = self.refs.caption.cast::<HtmlElement>();

        let surfaces = HeroSurfaces {
            mask: mask.as_ref(),
            media,
            title_top: title_top.as_ref(),
            title_bottom: title_bottom.as_ref(),
            caption: caption.as_ref(),
        };
        apply_frame(&frame, &surfaces);
    }

    fn measure(&self) -> Result<ScrollState, LandingError> {
        let scroll_y = error::window()?.scroll_y().map_err(LandingError::dom)?;
        let (_, viewport_height) = viewport_size();
        // no track yet reads as zero extent
        let track_height = self
            .refs
            .track
            .cast::<HtmlElement>()
            .map(|track| f64::from(track.offset_height()))
            .unwrap_or(0.0);
        Ok(ScrollState::measure(scroll_y, track_height, viewport_height))
    }

    /// Cancels any queued frame. Frames that already fired see a closed gate
    /// and write nothing.
    pub fn teardown(&self) {
        if self.gate.borrow_mut().close().is_some() {
            log::debug!("cancelled pending hero frame");
        }
    }
}

fn find_media(mask: &HtmlElement) -> Option<HtmlElement> {
    mask.query_selector("video")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Wires a [`ScrollAnimator`] to window scroll for the lifetime of the calling
/// component and returns the refs the component must attach.
#[hook]
pub fn use_scroll_animation(config: HeroConfig) -> HeroRefs {
    let refs = use_memo(|_| HeroRefs::default(), ());

    {
        let refs = (*refs).clone();
        use_effect_with_deps(
            move |config: &HeroConfig| {
                let animator = ScrollAnimator::new(refs, *config);
                let callback = Closure::<dyn Fn(Event)>::new({
                    let animator = Rc::clone(&animator);
                    move |_: Event| animator.notify()
                });
                let listener = match WindowListener::passive("scroll", callback) {
                    Ok(listener) => Some(listener),
                    Err(e) => {
                        log::error!("hero scroll animation disabled: {}", e);
                        None
                    }
                };
                // Initial frame so a restored scroll position renders correctly
                animator.notify();

                move || {
                    drop(listener);
                    animator.teardown();
                }
            },
            config,
        );
    }

    (*refs).clone()
}
