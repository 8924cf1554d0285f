use crate::{
	page::app::Context,
	session::Command,
	system::import::parse_hero,
	utility::InputExt,
};
use yew::prelude::*;

/// Paste area for a hero document. A document which doesn't parse is reported here
/// and never reaches the roster.
#[function_component]
pub fn ImportPanel() -> Html {
	let context = use_context::<Context>().unwrap();
	let text_area = use_node_ref();
	let problem = use_state(|| None::<String>);

	let on_import = Callback::from({
		let context = context.clone();
		let text_area = text_area.clone();
		let problem = problem.clone();
		move |_: MouseEvent| {
			let text = text_area.input_value().unwrap_or_default();
			match parse_hero(&text) {
				Ok(hero) => {
					problem.set(None);
					context.dispatch(Command::AcceptImport(hero));
				}
				Err(err) => {
					log::warn!(target: "import", "Rejected hero document: {err}");
					problem.set(Some(err.to_string()));
				}
			}
		}
	});

	html! {
		<div class="import">
			<p>{"Paste the contents of an exported hero file."}</p>
			<textarea ref={text_area} class="form-control font-monospace mb-2" rows="12" />
			{(*problem).as_ref().map(|message| html!(<div class="alert alert-danger">{message}</div>))}
			<button class="btn btn-primary" onclick={on_import}>{"Import"}</button>
		</div>
	}
}
