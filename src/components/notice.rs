use crate::{
	page::app::Context,
	session::{Command, NoticeLevel},
};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a notice stays up before dismissing itself.
static NOTICE_DURATION_MS: u32 = 8_000;

#[function_component]
pub fn NoticeToast() -> Html {
	let context = use_context::<Context>().unwrap();
	let notice = context.notice().cloned();

	use_effect_with(notice.clone(), {
		let context = context.clone();
		move |notice| {
			// dropping the timeout cancels it, so a replaced notice gets its own full duration
			let timeout = notice.is_some().then(|| {
				Timeout::new(NOTICE_DURATION_MS, move || context.dispatch(Command::DismissNotice))
			});
			move || drop(timeout)
		}
	});

	let Some(notice) = notice else {
		return Html::default();
	};
	let dismiss = context.callback(|_: MouseEvent| Command::DismissNotice);
	let level = match notice.level {
		NoticeLevel::Warning => "text-bg-warning",
		NoticeLevel::Error => "text-bg-danger",
	};
	html! {
		<div class="toast-container position-fixed bottom-0 end-0 p-3">
			<div class={classes!("toast", "show", level)} role="alert">
				<div class="d-flex">
					<div class="toast-body">{notice.message}</div>
					<button type="button" class="btn-close me-2 m-auto" aria-label="Close" onclick={dismiss} />
				</div>
			</div>
		</div>
	}
}
