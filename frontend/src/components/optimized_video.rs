use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::error::LandingError;

#[derive(Properties, PartialEq)]
pub struct OptimizedVideoProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub autoplay: bool,
    #[prop_or(true)]
    pub looped: bool,
    #[prop_or(true)]
    pub muted: bool,
    #[prop_or(true)]
    pub plays_inline: bool,
    /// Preload the whole file instead of just metadata.
    #[prop_or_default]
    pub priority: bool,
}

fn preload_hint(priority: bool) -> &'static str {
    if priority {
        "auto"
    } else {
        "metadata"
    }
}

async fn start_playback(video: HtmlVideoElement) -> Result<(), LandingError> {
    let promise = video.play().map_err(LandingError::dom)?;
    JsFuture::from(promise).await.map_err(LandingError::dom)?;
    Ok(())
}

/// Video that stays transparent until the browser can play it, then fades in.
#[function_component(OptimizedVideo)]
pub fn optimized_video(props: &OptimizedVideoProps) -> Html {
    let video_ref = use_node_ref();
    let loaded = use_state_eq(|| false);

    {
        let video_ref = video_ref.clone();
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |(src, autoplay): &(AttrValue, bool)| {
                let autoplay = *autoplay;
                let video = video_ref.cast::<HtmlVideoElement>();
                let callback = Closure::<dyn Fn()>::new({
                    let video = video.clone();
                    move || {
                        loaded.set(true);
                        if !autoplay {
                            return;
                        }
                        if let Some(video) = video.clone() {
                            wasm_bindgen_futures::spawn_local(async move {
                                if let Err(e) = start_playback(video).await {
                                    gloo_console::log!(format!("video autoplay blocked: {}", e));
                                }
                            });
                        }
                    }
                });

                if let Some(video) = &video {
                    if let Err(e) = video
                        .add_event_listener_with_callback("canplay", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("could not watch {} for canplay: {:?}", src, e);
                    }
                }

                move || {
                    if let Some(video) = video {
                        if let Err(e) = video.remove_event_listener_with_callback(
                            "canplay",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            log::warn!("failed to remove canplay listener: {:?}", e);
                        }
                    }
                }
            },
            (props.src.clone(), props.autoplay),
        );
    }

    html! {
        <video
            ref={video_ref}
            src={props.src.clone()}
            class={classes!(
                "optimized-video",
                props.class.clone(),
                if *loaded { "loaded" } else { "loading" }
            )}
            autoplay={props.autoplay}
            loop={props.looped}
            muted={props.muted}
            playsinline={props.plays_inline}
            preload={preload_hint(props.priority)}
            style="transition: opacity 0.5s ease;"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_videos_preload_fully() {
        assert_eq!(preload_hint(true), "auto");
        assert_eq!(preload_hint(false), "metadata");
    }
}
