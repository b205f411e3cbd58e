//! Browser implementation of the UI port

use greencape_forms::{Target, UiError, UiPort};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

/// Turn a thrown JS value into something loggable
pub(crate) fn js_error(value: JsValue) -> UiError {
    UiError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// [`UiPort`] over the live document
pub struct DomUi {
    document: Document,
}

impl DomUi {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, target: Target<'_>) -> Result<Element, UiError> {
        let found = match target {
            Target::Id(id) => self.document.get_element_by_id(id),
            Target::SubmitOf(form) => self
                .document
                .query_selector(&format!("#{form} button[type=\"submit\"]"))
                .map_err(js_error)?,
        };
        found.ok_or_else(|| UiError::MissingElement(target.to_string()))
    }

    fn html_element(&self, target: Target<'_>) -> Result<HtmlElement, UiError> {
        self.element(target)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| UiError::Dom(format!("{target} is not an HTML element")))
    }
}

impl UiPort for DomUi {
    fn exists(&self, target: Target<'_>) -> bool {
        self.element(target).is_ok()
    }

    fn value(&self, target: Target<'_>) -> Result<String, UiError> {
        let el = self.element(target)?;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return Ok(input.value());
        }
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            return Ok(area.value());
        }
        if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            return Ok(select.value());
        }
        Err(UiError::Dom(format!("{target} has no value")))
    }

    fn is_checked(&self, target: Target<'_>) -> Result<bool, UiError> {
        self.element(target)?
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::checked)
            .ok_or_else(|| UiError::Dom(format!("{target} is not a checkbox")))
    }

    fn text(&self, target: Target<'_>) -> Result<String, UiError> {
        Ok(self.element(target)?.text_content().unwrap_or_default())
    }

    fn set_text(&self, target: Target<'_>, text: &str) -> Result<(), UiError> {
        self.element(target)?.set_text_content(Some(text));
        Ok(())
    }

    fn is_visible(&self, target: Target<'_>) -> Result<bool, UiError> {
        let display = self
            .html_element(target)?
            .style()
            .get_property_value("display")
            .map_err(js_error)?;
        Ok(display != "none")
    }

    fn set_visible(&self, target: Target<'_>, visible: bool) -> Result<(), UiError> {
        self.html_element(target)?
            .style()
            .set_property("display", if visible { "block" } else { "none" })
            .map_err(js_error)
    }

    fn attribute(&self, target: Target<'_>, name: &str) -> Result<Option<String>, UiError> {
        Ok(self.element(target)?.get_attribute(name))
    }

    fn set_attribute(&self, target: Target<'_>, name: &str, value: &str) -> Result<(), UiError> {
        self.element(target)?
            .set_attribute(name, value)
            .map_err(js_error)
    }

    fn remove_attribute(&self, target: Target<'_>, name: &str) -> Result<(), UiError> {
        self.element(target)?.remove_attribute(name).map_err(js_error)
    }

    fn has_class(&self, target: Target<'_>, class: &str) -> Result<bool, UiError> {
        Ok(self.element(target)?.class_list().contains(class))
    }

    fn add_class(&self, target: Target<'_>, class: &str) -> Result<(), UiError> {
        self.element(target)?.class_list().add_1(class).map_err(js_error)
    }

    fn remove_class(&self, target: Target<'_>, class: &str) -> Result<(), UiError> {
        self.element(target)?
            .class_list()
            .remove_1(class)
            .map_err(js_error)
    }

    fn set_class_name(&self, target: Target<'_>, class_name: &str) -> Result<(), UiError> {
        self.element(target)?.set_class_name(class_name);
        Ok(())
    }

    fn is_disabled(&self, target: Target<'_>) -> Result<bool, UiError> {
        let el = self.element(target)?;
        Ok(match el.dyn_ref::<HtmlButtonElement>() {
            Some(button) => button.disabled(),
            None => el.has_attribute("disabled"),
        })
    }

    fn set_disabled(&self, target: Target<'_>, disabled: bool) -> Result<(), UiError> {
        let el = self.element(target)?;
        if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
            return Ok(());
        }
        if disabled {
            el.set_attribute("disabled", "").map_err(js_error)
        } else {
            el.remove_attribute("disabled").map_err(js_error)
        }
    }

    fn reset_form(&self, form_id: &str) -> Result<(), UiError> {
        let form = self
            .element(Target::Id(form_id))?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| UiError::Dom(format!("#{form_id} is not a form")))?;
        form.reset();
        Ok(())
    }

    fn scroll_into_view(&self, target: Target<'_>) -> Result<(), UiError> {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        self.element(target)?
            .scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}
