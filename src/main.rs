//! Be My Valentine entry point
//!
//! Builds the page, wires pointer events to the dodge logic and handles the
//! Yes transition. On native targets it runs a headless dry run instead.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlVideoElement, MouseEvent};

    use be_my_valentine::audio::MusicPlayer;
    use be_my_valentine::dodge::{Dodger, Layout};
    use be_my_valentine::platform::{el, measure, now_ms, set_position, text_el};
    use gloo::events::EventListener;
    use gloo::timers::callback::Timeout;
    use be_my_valentine::{Card, HeartField, Settings};

    const SPARKLES: u32 = 5;

    fn client_point(event: &MouseEvent) -> Vec2 {
        Vec2::new(event.client_x() as f32, event.client_y() as f32)
    }

    /// Elements of the question view
    struct QuestionView {
        arena: Element,
        yes_btn: Element,
        no_btn: HtmlElement,
    }

    /// Widget instance holding all state
    struct Widget {
        settings: Settings,
        card: Card,
        dodger: Dodger,
        document: Document,
        /// Swappable content area of the card
        body: Element,
        question: Option<QuestionView>,
        music: MusicPlayer,
    }

    impl Widget {
        /// Measure the arena and both buttons; `None` once they're gone
        fn layout(&self) -> Option<Layout> {
            let q = self.question.as_ref()?;
            let yes = measure(&q.yes_btn);
            Some(Layout {
                arena: measure(&q.arena),
                target: measure(&q.no_btn),
                accept: (!yes.is_empty()).then_some(yes),
            })
        }

        /// Move the No button on screen
        fn apply(&self, pos: Option<Vec2>) {
            if let (Some(pos), Some(q)) = (pos, self.question.as_ref()) {
                set_position(&q.no_btn, pos);
            }
        }

        fn pointer_moved(&mut self, event: &MouseEvent) {
            let layout = self.layout();
            let pos = self
                .dodger
                .pointer_moved(layout.as_ref(), client_point(event), now_ms());
            self.apply(pos);
        }

        fn pointer_entered(&mut self, event: &MouseEvent) {
            let layout = self.layout();
            let pos = self.dodger.pointer_entered(layout.as_ref(), client_point(event));
            self.apply(pos);
        }

        fn pressed(&mut self, event: &MouseEvent) {
            let layout = self.layout();
            let pos = self.dodger.pressed(layout.as_ref(), client_point(event));
            self.apply(pos);
        }

        fn resized(&mut self) {
            let layout = self.layout();
            let pos = self.dodger.resized(layout.as_ref());
            self.apply(pos);
        }

        fn place_initial(&mut self) {
            let layout = self.layout();
            let pos = self.dodger.place_initial(layout.as_ref());
            self.apply(pos);
        }

        /// Yes pressed: switch to the celebration and start the music
        fn accept(&mut self) -> Result<(), JsValue> {
            let celebration = self.card.accept();
            log::info!("No button dodged {} times", self.dodger.moves());

            self.question = None;
            self.body.set_inner_html("");
            self.render_accepted(celebration.replay)?;
            if let Some(card) = self.body.parent_element() {
                card.set_class_name("card card--accepted");
            }

            if celebration.restart_music {
                self.music.play_from_start();
            }
            Ok(())
        }

        fn render_question(&mut self) -> Result<(), JsValue> {
            let doc = &self.document;
            let body = &self.body;

            body.append_child(&text_el(doc, "p", "card__eyebrow", &self.settings.greeting())?)?;
            body.append_child(&text_el(doc, "h1", "card__title", "Will you be my Valentine?")?)?;
            body.append_child(&text_el(doc, "p", "card__subtitle", "Choose wisely. (Or… try to.)")?)?;

            let arena = el(doc, "div", "arena")?;
            let yes_slot = el(doc, "div", "arena__yesSlot")?;
            let yes_btn = text_el(doc, "button", "btn btn--yes", "Yes")?;
            yes_btn.set_attribute("type", "button")?;
            yes_slot.append_child(&yes_btn)?;
            arena.append_child(&yes_slot)?;

            let no_btn: HtmlElement = text_el(doc, "button", "btn btn--no", "No")?.dyn_into()?;
            no_btn.set_attribute("type", "button")?;
            no_btn.set_attribute("aria-label", "No (this button will move)")?;
            no_btn.set_tab_index(-1);
            // Until measured: centered in the right half
            no_btn.style().set_css_text(
                "position: absolute; left: 75%; top: 50%; transform: translate(-50%, -50%)",
            );
            arena.append_child(&no_btn)?;
            body.append_child(&arena)?;

            self.question = Some(QuestionView {
                arena,
                yes_btn,
                no_btn,
            });
            Ok(())
        }

        fn render_accepted(&self, replay: u32) -> Result<(), JsValue> {
            let doc = &self.document;
            let body = &self.body;

            // Fresh node per acceptance so the sparkle animation restarts
            let celebrate = el(doc, "div", "celebrate")?;
            celebrate.set_attribute("aria-hidden", "true")?;
            celebrate.set_attribute("data-replay", &replay.to_string())?;
            for i in 1..=SPARKLES {
                celebrate.append_child(&el(doc, "span", &format!("sparkle sparkle--{i}"))?)?;
            }
            body.append_child(&celebrate)?;

            let layout = el(doc, "div", "acceptedLayout")?;

            let text = el(doc, "div", "acceptedText")?;
            text.append_child(&text_el(doc, "p", "card__eyebrow", "Yayyyyy!")?)?;
            text.append_child(&text_el(
                doc,
                "h1",
                "card__title card__title--accepted",
                "You just made my day.",
            )?)?;
            let message = el(doc, "p", "card__subtitle card__subtitle--accepted")?;
            let lines = [
                "Happy Valentine’s Day, my favorite person.",
                "My apologies for not being there but I will make it up to you.",
                "I love you so much.",
            ];
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    message.append_child(&doc.create_element("br")?)?;
                }
                message.append_child(&doc.create_text_node(line))?;
            }
            text.append_child(&message)?;

            let actions = el(doc, "div", "acceptedActions")?;
            let badge = text_el(doc, "span", "acceptedActions__badge", "💗 Officially Valentines 💗")?;
            badge.set_attribute("aria-hidden", "true")?;
            actions.append_child(&badge)?;
            text.append_child(&actions)?;
            layout.append_child(&text)?;

            let video_wrap = el(doc, "div", "acceptedVideoWrap")?;
            video_wrap.set_attribute("aria-label", "Valentine video")?;
            let video: HtmlVideoElement = el(doc, "video", "acceptedVideo")?.dyn_into()?;
            video.set_src(&self.settings.assets().accepted_video);
            video.set_autoplay(true);
            video.set_loop(true);
            video.set_muted(true);
            video.set_preload("auto");
            video.set_attribute("playsinline", "")?;
            video_wrap.append_child(&video)?;
            layout.append_child(&video_wrap)?;

            body.append_child(&layout)?;
            Ok(())
        }
    }

    /// Hearts layer behind the card
    fn render_hearts(doc: &Document, field: &HeartField) -> Result<Element, JsValue> {
        let layer = el(doc, "div", "heartsBg")?;
        layer.set_attribute("aria-hidden", "true")?;
        for heart in field.hearts() {
            let span = el(doc, "span", "heart")?;
            span.set_attribute("data-key", &heart.key())?;
            span.set_attribute("style", &heart.style())?;
            layer.append_child(&span)?;
        }
        Ok(layer)
    }

    /// A mounted widget; dropping it removes listeners, timer and DOM
    struct Mounted {
        _widget: Rc<RefCell<Widget>>,
        root: Element,
        _listeners: Vec<EventListener>,
        _arming: Timeout,
    }

    impl Drop for Mounted {
        fn drop(&mut self) {
            self.root.remove();
            log::info!("Valentine widget unmounted");
        }
    }

    thread_local! {
        static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Be My Valentine starting...");

        match mount() {
            Ok(mounted) => {
                MOUNTED.with(|m| *m.borrow_mut() = Some(mounted));
                log::info!("Be My Valentine mounted");
            }
            Err(e) => log::error!("Failed to mount widget: {:?}", e),
        }
    }

    pub fn unmount() {
        MOUNTED.with(|m| m.borrow_mut().take());
    }

    fn mount() -> Result<Mounted, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
        let host: Element = match document.get_element_by_id("app") {
            Some(el) => el,
            None => document.body().ok_or_else(|| JsValue::from_str("no body"))?.into(),
        };

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        log::info!("Widget initialized with seed: {}", seed);

        // Page skeleton
        let root = el(&document, "div", "page")?;
        let hearts = HeartField::generate(settings.heart_count, seed);
        root.append_child(&render_hearts(&document, &hearts)?)?;

        let content = el(&document, "main", "content")?;
        content.set_attribute("aria-label", "Valentine page content")?;
        let section = el(&document, "section", "card")?;
        section.set_attribute("aria-live", "polite")?;
        let body = el(&document, "div", "card__body")?;
        section.append_child(&body)?;

        let music = MusicPlayer::new(&document, &settings.assets(), settings.music_volume)?;
        section.append_child(music.element())?;

        let footer = text_el(&document, "p", "card__footer", "Made with love. ❤️")?;
        footer.set_attribute("aria-hidden", "true")?;
        section.append_child(&footer)?;
        content.append_child(&section)?;
        root.append_child(&content)?;

        let dodger = Dodger::new(settings.dodge, seed.rotate_left(32) ^ 0x5bd1_e995);
        let arming_delay = settings.dodge.arming_delay_ms;
        let mut widget = Widget {
            settings,
            card: Card::new(),
            dodger,
            document: document.clone(),
            body,
            question: None,
            music,
        };
        widget.render_question()?;

        host.append_child(&root)?;
        widget.place_initial();

        let widget = Rc::new(RefCell::new(widget));
        let listeners = setup_listeners(&window, &widget)?;

        let arming = {
            let widget = widget.clone();
            Timeout::new(arming_delay, move || widget.borrow_mut().dodger.arm())
        };

        Ok(Mounted {
            _widget: widget,
            root,
            _listeners: listeners,
            _arming: arming,
        })
    }

    fn setup_listeners(
        window: &web_sys::Window,
        widget: &Rc<RefCell<Widget>>,
    ) -> Result<Vec<EventListener>, JsValue> {
        let (arena, yes_btn, no_btn) = {
            let w = widget.borrow();
            let q = w
                .question
                .as_ref()
                .ok_or_else(|| JsValue::from_str("question view missing"))?;
            (q.arena.clone(), q.yes_btn.clone(), q.no_btn.clone())
        };

        let mut listeners = Vec::new();

        // Proximity tracking over the whole arena and the button itself
        let arena_target: &EventTarget = arena.as_ref();
        let no_target: &EventTarget = no_btn.as_ref();
        for target in [arena_target, no_target] {
            for kind in ["pointermove", "mousemove"] {
                let widget = widget.clone();
                listeners.push(EventListener::new(target, kind, move |event: &Event| {
                    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                        widget.borrow_mut().pointer_moved(mouse);
                    }
                }));
            }
        }

        // Hover enter
        for kind in ["pointerenter", "mouseenter"] {
            let widget = widget.clone();
            listeners.push(EventListener::new(no_target, kind, move |event: &Event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    widget.borrow_mut().pointer_entered(mouse);
                }
            }));
        }

        // Never take focus
        listeners.push(EventListener::new(no_target, "mousedown", |event: &Event| {
            event.prevent_default();
        }));

        // Press attempt: dodge instead of clicking, even before arming
        {
            let widget = widget.clone();
            listeners.push(EventListener::new(no_target, "pointerdown", move |event: &Event| {
                event.prevent_default();
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    widget.borrow_mut().pressed(mouse);
                }
            }));
        }

        // Yes
        {
            let widget = widget.clone();
            listeners.push(EventListener::new(&yes_btn, "click", move |_event: &Event| {
                if let Err(e) = widget.borrow_mut().accept() {
                    log::error!("Failed to render celebration: {:?}", e);
                }
            }));
        }

        // Keep the No button inside the arena
        {
            let widget = widget.clone();
            listeners.push(EventListener::new(window, "resize", move |_event: &Event| {
                widget.borrow_mut().resized();
            }));
        }

        Ok(listeners)
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

/// Tear the widget down (listeners, arming timer, DOM)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn unmount() {
    wasm_app::unmount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    log::info!("Be My Valentine (native) starting...");
    log::info!("The widget runs in the browser - build it with `trunk serve`");

    dry_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the dodge logic headlessly with a scripted pointer
#[cfg(not(target_arch = "wasm32"))]
fn dry_run() {
    use be_my_valentine::dodge::{Dodger, Layout};
    use be_my_valentine::{Card, HeartField, Rect, Settings};
    use glam::Vec2;

    let settings = Settings::load();
    let seed = 20260214;

    let hearts = HeartField::generate(settings.heart_count, seed);
    log::info!("Generated {} hearts", hearts.len());

    let arena = Rect::new(0.0, 0.0, 400.0, 300.0);
    let button = Vec2::new(80.0, 40.0);
    let yes = Rect::new(60.0, 130.0, 80.0, 40.0);

    let mut dodger = Dodger::new(settings.dodge, seed);
    let layout = |pos: Vec2| Layout {
        arena,
        target: Rect::from_pos_size(pos, button),
        accept: Some(yes),
    };

    let Some(mut pos) = dodger.place_initial(Some(&layout(Vec2::ZERO))) else {
        return;
    };
    log::info!("Start at ({:.0}, {:.0})", pos.x, pos.y);

    // Too early: nothing happens before arming
    let chase = layout(pos).target.center();
    if dodger.pointer_moved(Some(&layout(pos)), chase, 100.0).is_none() {
        log::info!("Not armed yet, No stays put");
    }
    dodger.arm();

    // Chase the button
    let mut now = 500.0;
    for _ in 0..10 {
        let pointer = layout(pos).target.center() + Vec2::new(5.0, -5.0);
        if let Some(next) = dodger.pointer_moved(Some(&layout(pos)), pointer, now) {
            log::info!(
                "Pointer at ({:.0}, {:.0}) -> No jumps to ({:.0}, {:.0})",
                pointer.x,
                pointer.y,
                next.x,
                next.y
            );
            pos = next;
        }
        now += 150.0;
    }

    let mut card = Card::new();
    let celebration = card.accept();
    log::info!(
        "Answer: {:?} after {} dodges (replay {})",
        card.answer(),
        dodger.moves(),
        celebration.replay
    );
}
