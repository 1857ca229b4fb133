//! DOM side of the HUD and end screen
//!
//! Missing optional elements are skipped; only failures of calls that should
//! always work are propagated.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, MouseEvent};

use crate::presentation::{Balloon, Celebration, Confetti, EndScreen, score_label};

pub const SCORE_ID: &str = "score";
pub const GAME_CONTAINER_ID: &str = "game-container";
pub const MOBILE_CONTROLS_ID: &str = "mobile-controls";
pub const GAME_OVER_CONTAINER_ID: &str = "game-over-container";
pub const HEADLINE_ID: &str = "game-over-message";
pub const SUBLINE_ID: &str = "game-over-sub-message";
pub const BALLOON_CONTAINER: &str = ".balloon-container";
pub const CONFETTI_CONTAINER: &str = ".confetti-container";
pub const BALLOON_IMAGE: &str = "./balloon.png";

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Write `Score: {n}` into the score element
pub fn set_score(document: &Document, score: u32) {
    if let Some(el) = document.get_element_by_id(SCORE_ID) {
        el.set_text_content(Some(&score_label(score)));
    }
}

fn set_display(document: &Document, id: &str, display: &str) -> Result<(), JsValue> {
    if let Some(el) = document.get_element_by_id(id) {
        el.dyn_into::<HtmlElement>()?
            .style()
            .set_property("display", display)?;
    }
    Ok(())
}

/// Hide the play surface and show the end screen for `screen`
pub fn show_end_screen(document: &Document, screen: &EndScreen) -> Result<(), JsValue> {
    set_display(document, GAME_CONTAINER_ID, "none")?;
    set_display(document, MOBILE_CONTROLS_ID, "none")?;
    set_display(document, GAME_OVER_CONTAINER_ID, "block")?;

    if let Some(el) = document.get_element_by_id(HEADLINE_ID) {
        el.set_text_content(Some(&screen.headline));
    }
    if let Some(el) = document.get_element_by_id(SUBLINE_ID) {
        el.set_text_content(Some(&screen.subline));
    }

    if let Some(celebration) = &screen.celebration {
        celebrate(document, celebration)?;
    }
    Ok(())
}

fn celebrate(document: &Document, celebration: &Celebration) -> Result<(), JsValue> {
    if let Some(container) = document.query_selector(BALLOON_CONTAINER)? {
        container.set_inner_html("");
        for balloon in &celebration.balloons {
            container.append_child(&balloon_element(document, balloon)?)?;
        }
    }
    if let Some(container) = document.query_selector(CONFETTI_CONTAINER)? {
        container.set_inner_html("");
        for piece in &celebration.confetti {
            container.append_child(&confetti_element(document, piece)?)?;
        }
    }
    log::info!(
        "Released {} balloons and {} confetti",
        celebration.balloons.len(),
        celebration.confetti.len()
    );
    Ok(())
}

fn balloon_element(document: &Document, balloon: &Balloon) -> Result<Element, JsValue> {
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    el.set_class_name("balloon");
    let style = el.style();
    style.set_property("width", &format!("{}px", balloon.size))?;
    style.set_property("height", &format!("{}px", balloon.size))?;
    style.set_property("position", "absolute")?;
    style.set_property("left", &format!("{}px", balloon.left))?;
    style.set_property("top", &format!("{}px", balloon.top))?;
    style.set_property("animation-duration", &format!("{}ms", balloon.duration_ms))?;

    let img: HtmlImageElement = document.create_element("img")?.dyn_into()?;
    img.set_src(BALLOON_IMAGE);
    img.style().set_property("width", "100%")?;
    img.style().set_property("height", "100%")?;
    el.append_child(&img)?;

    // Pop on click
    let target = el.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        target.remove();
    });
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(el.into())
}

fn confetti_element(document: &Document, piece: &Confetti) -> Result<Element, JsValue> {
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    el.set_class_name("confetti");
    let style = el.style();
    style.set_property("background-color", piece.color)?;
    style.set_property("left", &format!("{}%", piece.left_pct))?;
    style.set_property("top", &format!("{}vh", piece.top_vh))?;
    style.set_property("animation-duration", &format!("{}s", piece.duration_s))?;
    Ok(el.into())
}
