use std::str::FromStr;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Reads form field values from change events and node refs.
pub trait InputExt {
	/// The form element behind the event or ref, if there is one.
	fn field(&self) -> Option<Element>;

	/// The text of an input, textarea or select.
	fn input_value(&self) -> Option<String> {
		let field = self.field()?;
		if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
			return Some(input.value());
		}
		if let Some(text_area) = field.dyn_ref::<HtmlTextAreaElement>() {
			return Some(text_area.value());
		}
		field.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
	}

	fn input_value_t<T: FromStr>(&self) -> Option<T> {
		self.input_value()?.parse::<T>().ok()
	}

	fn input_checked(&self) -> Option<bool> {
		let field = self.field()?;
		field.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::checked)
	}
}

impl InputExt for web_sys::Event {
	fn field(&self) -> Option<Element> {
		self.target()?.dyn_into::<Element>().ok()
	}
}

impl InputExt for yew::prelude::NodeRef {
	fn field(&self) -> Option<Element> {
		self.cast::<Element>()
	}
}
