use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;

use crate::animation::frame_gate::FrameGate;
use crate::animation::parallax::{drift, pointer_offset};
use crate::content::FloatingModule;
use crate::hooks::{viewport_size, WindowListener};

const PARTICLES_PER_MODULE: usize = 3;

/// Randomized once per mount so every visit drifts a little differently.
#[derive(Clone, PartialEq)]
struct Motion {
    dx: f64,
    dy: f64,
    drot: f64,
    drift_secs: f64,
    glow_secs: f64,
    particles: Vec<Particle>,
}

#[derive(Clone, PartialEq)]
struct Particle {
    left: f64,
    top: f64,
    secs: f64,
    delay: f64,
}

impl Motion {
    fn random() -> Self {
        Self {
            dx: drift(Math::random(), 15.0),
            dy: drift(Math::random(), 15.0),
            drot: drift(Math::random(), 5.0),
            drift_secs: 3.0 + Math::random() * 2.0,
            glow_secs: 2.0 + Math::random(),
            particles: (0..PARTICLES_PER_MODULE)
                .map(|_| Particle {
                    left: Math::random() * 100.0,
                    top: Math::random() * 100.0,
                    secs: 3.0 + Math::random() * 2.0,
                    delay: Math::random(),
                })
                .collect(),
        }
    }
}

/// Follows the pointer with at most one offset update per frame.
struct PointerFollow {
    pointer: Cell<(f64, f64)>,
    gate: RefCell<FrameGate<AnimationFrame>>,
    count: usize,
    on_offsets: Callback<Vec<(f64, f64)>>,
}

impl PointerFollow {
    fn track(self: &Rc<Self>, event: &MouseEvent) {
        self.pointer
            .set((f64::from(event.client_x()), f64::from(event.client_y())));
        let follow = Rc::clone(self);
        self.gate.borrow_mut().schedule_with(move || {
            request_animation_frame(move |_| follow.flush())
        });
    }

    fn flush(&self) {
        if !self.gate.borrow_mut().begin_frame() {
            return;
        }
        let viewport = viewport_size();
        let pointer = self.pointer.get();
        let offsets = (0..self.count)
            .map(|index| pointer_offset(pointer, viewport, index))
            .collect();
        self.on_offsets.emit(offsets);
    }

    fn stop(&self) {
        drop(self.gate.borrow_mut().close());
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingModulesProps {
    pub modules: &'static [FloatingModule],
}

#[function_component(FloatingModules)]
pub fn floating_modules(props: &FloatingModulesProps) -> Html {
    let count = props.modules.len();
    let entered = use_state_eq(|| false);
    let offsets = use_state_eq(|| vec![(0.0, 0.0); count]);
    let motions = use_memo(|count| (0..*count).map(|_| Motion::random()).collect::<Vec<_>>(), count);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(50, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    {
        let offsets = offsets.clone();
        use_effect_with_deps(
            move |count: &usize| {
                let follow = Rc::new(PointerFollow {
                    pointer: Cell::new((0.0, 0.0)),
                    gate: RefCell::new(FrameGate::new()),
                    count: *count,
                    on_offsets: Callback::from(move |next| offsets.set(next)),
                });
                let callback = Closure::<dyn Fn(Event)>::new({
                    let follow = Rc::clone(&follow);
                    move |event: Event| {
                        if let Some(event) = event.dyn_ref::<MouseEvent>() {
                            follow.track(event);
                        }
                    }
                });
                let listener = WindowListener::passive("mousemove", callback)
                    .map_err(|e| log::warn!("pointer parallax disabled: {}", e))
                    .ok();

                move || {
                    drop(listener);
                    follow.stop();
                }
            },
            count,
        );
    }

    html! {
        <div class="floating-modules">
            { for props.modules.iter().enumerate().map(|(index, module)| {
                let (ox, oy) = offsets.get(index).copied().unwrap_or((0.0, 0.0));
                let motion = motions.get(index).cloned().unwrap_or_else(Motion::random);
                let item_style = format!(
                    "--rot: {}deg; --rot-start: {}deg; --dx: {}px; --dy: {}px; --drot: {}deg; \
                     --drift-secs: {}s; --glow-secs: {}s; transition-delay: {}s; animation-delay: {}s;",
                    module.rotation,
                    module.rotation * 2.0,
                    motion.dx,
                    motion.dy,
                    motion.drot,
                    motion.drift_secs,
                    motion.glow_secs,
                    module.delay,
                    module.delay,
                );
                html! {
                    <div
                        class="module-anchor"
                        key={module.name.clone()}
                        style={format!("left: {}%; top: {}%;", module.x, module.y)}
                    >
                        <div
                            class="module-parallax"
                            style={format!("transform: translate({}px, {}px);", ox, oy)}
                        >
                            <div class={classes!("module-item", entered.then_some("entered"))} style={item_style}>
                                <div class="glow"></div>
                                <div class="module-card">
                                    <h3>
                                        { for module.name.split(' ').enumerate().map(|(i, word)| html! {
                                            <span style={format!("animation-delay: {}s;", i as f64 * 0.3)}>
                                                { word.to_string() }
                                            </span>
                                        }) }
                                    </h3>
                                    <div class="accent-line"></div>
                                </div>
                                <div class="particles">
                                    { for motion.particles.iter().map(|p| html! {
                                        <div
                                            class="particle"
                                            style={format!(
                                                "left: {}%; top: {}%; animation: module-float {}s ease-in-out {}s infinite;",
                                                p.left, p.top, p.secs, p.delay
                                            )}
                                        ></div>
                                    }) }
                                </div>
                            </div>
                        </div>
                    </div>
                }
            }) }
            <style>
                {r#"
    .floating-modules {
        position: fixed;
        inset: 0;
        z-index: 20;
        pointer-events: none;
        perspective: 1000px;
    }
    .module-anchor {
        position: absolute;
        transform: translate(-50%, -50%);
        transform-style: preserve-3d;
    }
    .module-parallax {
        transition: transform 1s cubic-bezier(0.25, 0.46, 0.45, 0.94);
    }
    .module-item {
        position: relative;
        pointer-events: auto;
        cursor: pointer;
        opacity: 0;
        transform: scale(0) rotateZ(var(--rot-start));
        transition: transform 1.5s cubic-bezier(0.34, 1.56, 0.64, 1), opacity 1.5s ease, filter 0.3s ease;
    }
    .module-item.entered {
        opacity: 1;
        transform: scale(1) rotateZ(var(--rot));
        animation: module-drift var(--drift-secs) ease-in-out infinite alternate;
    }
    .module-item:hover {
        filter: drop-shadow(0 0 20px rgba(0, 120, 180, 0.6));
    }
    .module-card {
        position: relative;
        z-index: 10;
        padding: 1rem 2rem;
        border: 5px solid #0078B4;
        backdrop-filter: blur(4px);
        background: linear-gradient(to bottom right, rgba(0, 120, 180, 0.2), transparent);
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
        transition: transform 0.6s cubic-bezier(0.25, 0.46, 0.45, 0.94);
    }
    .module-item:hover .module-card {
        transform: scale(1.1) rotateY(10deg) rotateX(-5deg);
    }
    .module-card h3 {
        margin: 0;
        font-family: var(--font-primary);
        font-weight: 900;
        font-size: 1.875rem;
        color: #fff;
        white-space: nowrap;
        text-transform: uppercase;
        letter-spacing: -0.025em;
    }
    .module-card h3 span {
        display: inline-block;
        margin-right: 0.5rem;
        background-image: linear-gradient(90deg, #ffffff 0%, #0078B4 50%, #ffffff 100%);
        background-size: 200% auto;
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
        background-clip: text;
        animation: module-shimmer 3s ease-in-out infinite;
    }
    .accent-line {
        height: 3px;
        margin-top: 0.5rem;
        background: #0078B4;
        animation: module-expand 2s ease-in-out infinite;
    }
    .glow {
        position: absolute;
        inset: 0;
        filter: blur(40px);
        opacity: 0.3;
        background: radial-gradient(circle, #0078B4 0%, transparent 70%);
        transform: translateZ(-10px);
        animation: module-glow var(--glow-secs) ease-in-out infinite alternate;
    }
    .particles {
        position: absolute;
        inset: 0;
        pointer-events: none;
    }
    .particle {
        position: absolute;
        width: 0.5rem;
        height: 0.5rem;
        background: #0078B4;
    }
    @keyframes module-drift {
        to {
            translate: var(--dx) var(--dy);
            rotate: var(--drot);
        }
    }
    @keyframes module-glow {
        to {
            opacity: 0.6;
            scale: 1.2;
        }
    }
    @keyframes module-shimmer {
        0%, 100% { background-position: 0% center; }
        50% { background-position: 200% center; }
    }
    @keyframes module-expand {
        0%, 100% { width: 30%; opacity: 0.5; }
        50% { width: 100%; opacity: 1; }
    }
    @keyframes module-float {
        0%, 100% { transform: translateY(0px) translateX(0px); opacity: 0; }
        50% { transform: translateY(-20px) translateX(10px); opacity: 0.6; }
    }
    @media (max-width: 768px) {
        .floating-modules {
            display: none;
        }
    }
                "#}
            </style>
        </div>
    }
}
