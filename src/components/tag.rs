use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct TagProps {
	#[prop_or_default]
	pub active: bool,
	/// A disabled tag is greyed out and ignores clicks.
	#[prop_or_default]
	pub disabled: bool,
	#[prop_or_default]
	pub classes: Classes,
	#[prop_or_default]
	pub children: Children,
	/// Emitted when the tag is clicked, with the argument
	/// indicating if tag is currently active or not.
	#[prop_or_default]
	pub on_click: Option<Callback<bool>>,
}

#[function_component]
pub fn Tag(
	TagProps {
		active,
		disabled,
		classes,
		children,
		on_click,
	}: &TagProps,
) -> Html {
	let mut classes = classes!("badge", "rounded-pill", "tag", classes.clone());
	classes.push(match *active {
		true => "text-bg-primary",
		false => "text-bg-light",
	});
	if *disabled {
		classes.push("opacity-50");
	}
	let is_active = *active;
	let onclick = match *disabled {
		true => None,
		false => on_click
			.as_ref()
			.map(|callback| callback.reform(move |_: MouseEvent| is_active)),
	};
	if onclick.is_some() {
		classes.push("clickable");
	}
	html! {
		<span class={classes} {onclick}>{children.clone()}</span>
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct TagsProps {
	#[prop_or_default]
	pub classes: Classes,
	#[prop_or_default]
	pub children: Children,
}

#[function_component]
pub fn Tags(TagsProps { classes, children }: &TagsProps) -> Html {
	let classes = classes!("d-flex", "flex-wrap", "gap-1", "tags", classes.clone());
	html! {
		<div class={classes}>{children.clone()}</div>
	}
}
