use crate::constants::*;
use crate::dom;
use pillow_core::{
    depth_stack, DesignSession, PreviewMode, SessionStatus, SIZE_TIERS, PREVIEW_MAX_HEIGHT_PX,
    PREVIEW_MAX_WIDTH_PX,
};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM handles the controller writes to. Looked up once at startup.
pub struct Ui {
    pub document: web::Document,
    pub surface: web::HtmlElement,
    pub area: web::HtmlElement,
    pub stage: web::HtmlElement,
    pub prompt: web::HtmlElement,
    pub controls: web::HtmlElement,
    pub reset_label: web::HtmlElement,
    pub dim_width: web::HtmlElement,
    pub dim_height: web::HtmlElement,
    pub readout: web::HtmlElement,
    pub readout_text: web::HtmlElement,
    pub hint: web::HtmlElement,
    pub layers: Vec<web::HtmlImageElement>,
    pub tier_buttons: Vec<(&'static str, web::HtmlElement)>,
}

impl Ui {
    pub fn build(document: &web::Document) -> anyhow::Result<Self> {
        let stage: web::HtmlElement = dom::element_by_id(document, PREVIEW_STAGE_ID)?;
        let tiers: web::HtmlElement = dom::element_by_id(document, SIZE_TIERS_ID)?;
        let layers = build_layer_stack(document, &stage)?;
        let tier_buttons = build_tier_buttons(document, &tiers)?;
        Ok(Self {
            document: document.clone(),
            surface: dom::element_by_id(document, PREVIEW_SURFACE_ID)?,
            area: dom::element_by_id(document, PREVIEW_AREA_ID)?,
            stage,
            prompt: dom::element_by_id(document, UPLOAD_PROMPT_ID)?,
            controls: dom::element_by_id(document, PREVIEW_CONTROLS_ID)?,
            reset_label: dom::element_by_id(document, RESET_LABEL_ID)?,
            dim_width: dom::element_by_id(document, DIMENSION_WIDTH_ID)?,
            dim_height: dom::element_by_id(document, DIMENSION_HEIGHT_ID)?,
            readout: dom::element_by_id(document, DIMENSION_READOUT_ID)?,
            readout_text: dom::element_by_id(document, DIMENSION_TEXT_ID)?,
            hint: dom::element_by_id(document, DRAG_HINT_ID)?,
            layers,
            tier_buttons,
        })
    }

    pub fn set_image_src(&self, url: &str) {
        for img in &self.layers {
            img.set_src(url);
        }
    }

    /// Per-frame update: only the stage transform changes.
    pub fn apply_orientation(&self, session: &DesignSession) {
        let preview = session.preview();
        dom::set_style(&self.stage, "transform", &preview.css_transform());
        let transition = if preview.is_dragging() {
            STAGE_TRANSITION_DRAGGING
        } else {
            STAGE_TRANSITION_IDLE
        };
        dom::set_style(&self.stage, "transition", transition);
    }

    /// Full refresh after any state change other than a frame tick.
    pub fn render(&self, session: &DesignSession) {
        let mode = session.preview().mode();
        let showing = mode.has_asset();
        dom::set_hidden(&self.prompt, showing);
        dom::set_hidden(&self.area, !showing);
        dom::set_hidden(&self.controls, !showing);
        dom::set_hidden(&self.readout, !showing);
        self.hint
            .set_text_content(if showing { Some(DRAG_HINT_TEXT) } else { None });

        let label = if mode == PreviewMode::AutoRotating {
            RESET_LABEL_AUTO
        } else {
            RESET_LABEL_MANUAL
        };
        self.reset_label.set_text_content(Some(label));

        if let Some(dims) = session.dimensions() {
            self.dim_width.set_text_content(Some(&dims.width_label()));
            self.dim_height.set_text_content(Some(&dims.height_label()));
            self.readout_text.set_text_content(Some(&dims.to_string()));
        }

        for (label, button) in &self.tier_buttons {
            let cl = button.class_list();
            if *label == session.selected_label() {
                _ = cl.add_1(SELECTED_CLASS);
            } else {
                _ = cl.remove_1(SELECTED_CLASS);
            }
        }

        match session.status() {
            SessionStatus::Failed { error } => crate::overlay::show_error(&self.document, &error.to_string()),
            _ => crate::overlay::hide_error(&self.document),
        }
        crate::overlay::set_processing(
            &self.document,
            matches!(session.status(), SessionStatus::Processing { .. }),
        );
        self.apply_orientation(session);
    }
}

fn create_html<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Front image plus the fading copies behind it, all sharing one source.
fn build_layer_stack(
    document: &web::Document,
    stage: &web::HtmlElement,
) -> anyhow::Result<Vec<web::HtmlImageElement>> {
    let holder: web::HtmlElement = create_html(document, "div")?;
    dom::set_style(&holder, "position", "relative");
    dom::set_style(&holder, "transform-style", "preserve-3d");
    dom::set_style(stage, "transform-style", "preserve-3d");

    let max_w = format!("{}px", PREVIEW_MAX_WIDTH_PX);
    let max_h = format!("{}px", PREVIEW_MAX_HEIGHT_PX);
    let mut layers = Vec::new();
    for (i, layer) in depth_stack().iter().enumerate() {
        let img: web::HtmlImageElement = create_html(document, "img")?;
        img.set_alt(if i == 0 { "3D Preview" } else { "" });
        img.set_draggable(false);
        dom::set_style(&img, "object-fit", "contain");
        dom::set_style(&img, "max-width", &max_w);
        dom::set_style(&img, "max-height", &max_h);
        dom::set_style(&img, "filter", &layer.css_filter());
        dom::set_style(&img, "transform", &layer.css_transform());
        if i > 0 {
            dom::set_style(&img, "position", "absolute");
            dom::set_style(&img, "top", "0");
            dom::set_style(&img, "left", "0");
            dom::set_style(&img, "opacity", &layer.opacity.to_string());
            dom::set_style(&img, "pointer-events", "none");
        }
        _ = holder.append_child(&img);
        layers.push(img);
    }
    _ = stage.append_child(&holder);
    log::debug!("[view] built {} depth layers", layers.len());
    Ok(layers)
}

fn build_tier_buttons(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<Vec<(&'static str, web::HtmlElement)>> {
    let mut buttons = Vec::with_capacity(SIZE_TIERS.len());
    for tier in SIZE_TIERS {
        let button: web::HtmlElement = create_html(document, "button")?;
        _ = button.set_attribute("type", "button");
        _ = button.set_attribute(TIER_LABEL_ATTR, tier.label);
        _ = button.class_list().add_1(TIER_BUTTON_CLASS);
        button.set_inner_html(&format!(
            "<div class='tier-size'>{}</div><div class='tier-strike'>{}</div><div class='tier-price'>{}</div>",
            tier.size_label, tier.strike_price, tier.price
        ));
        _ = container.append_child(&button);
        buttons.push((tier.label, button));
    }
    Ok(buttons)
}
