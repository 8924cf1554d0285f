use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct SpinnerProps {
	#[prop_or("Loading...".into())]
	pub label: AttrValue,
}

#[function_component]
pub fn Spinner(SpinnerProps { label }: &SpinnerProps) -> Html {
	html! {
		<div class="d-flex align-items-center" role="status">
			<div class="spinner-border spinner-border-sm me-1" aria-hidden="true" />
			<span class="small text-body-secondary">{label}</span>
		</div>
	}
}
