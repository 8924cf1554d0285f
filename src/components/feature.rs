use crate::{
	components::{Tag, Tags},
	system::data::{Ability, Feature, FeatureKind, Selection},
	utility::list_as_english,
};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct FeatureTreeProps {
	pub feature: Feature,
	/// The hero level that level-scaled values are shown for.
	pub level: u32,
	/// The abilities of the hero's class, which class ability picks choose from.
	#[prop_or_default]
	pub class_abilities: Vec<Ability>,
	/// Emitted with `(feature id, option key)` when an option is clicked.
	/// Without it, the tree is read-only.
	#[prop_or_default]
	pub on_toggle: Option<Callback<(String, String)>>,
}

/// Renders a feature, its payload, and (recursively) its nested features.
#[function_component]
pub fn FeatureTree(props: &FeatureTreeProps) -> Html {
	let FeatureTreeProps {
		feature,
		level,
		class_abilities,
		on_toggle,
	} = props;

	let progress = feature.selection_progress().map(|(selected, count)| {
		let classes = classes!(
			"badge",
			"ms-2",
			match selected < count {
				true => "text-bg-warning",
				false => "text-bg-success",
			}
		);
		html!(<span class={classes}>{format!("{selected} / {count}")}</span>)
	});

	html! {
		<div class="feature border-start ps-2 my-2">
			<div class="d-flex align-items-center">
				<strong>{&feature.name}</strong>
				<span class="text-body-secondary small ms-2">{feature.kind.type_name()}</span>
				{progress}
			</div>
			{(!feature.description.is_empty()).then(|| html!(<div class="small">{&feature.description}</div>))}
			{payload(props)}
			{feature.children().iter().map(|child| html! {
				<FeatureTree
					feature={child.clone()}
					level={*level}
					class_abilities={class_abilities.clone()}
					on_toggle={on_toggle.clone()}
				/>
			}).collect::<Vec<_>>()}
		</div>
	}
}

fn payload(props: &FeatureTreeProps) -> Html {
	let FeatureTreeProps {
		feature,
		level,
		class_abilities,
		on_toggle,
	} = props;
	let tags = |items: Vec<(String, String, bool)>, full: bool| {
		options(&feature.id, items, full, on_toggle.as_ref())
	};
	match &feature.kind {
		FeatureKind::Text | FeatureKind::Multiple(_) => Html::default(),
		FeatureKind::Ability(data) => html! {
			<div class="small">
				<em>{&data.ability.name}</em>
				{(!data.ability.description.is_empty()).then(|| html!(<>{": "}{&data.ability.description}</>))}
			</div>
		},
		FeatureKind::Bonus(data) => html! {
			<div class="small">{format!("{} {:+}", data.field.display_name(), data.value_at(*level))}</div>
		},
		FeatureKind::Choice(data) => tags(
			data.options
				.iter()
				.map(|option| {
					let key = option.feature.id.clone();
					let active = data.is_selected(&key);
					(key, option.feature.name.clone(), active)
				})
				.collect(),
			data.is_complete(),
		),
		FeatureKind::ClassAbility(data) => {
			let candidates = data.candidates(class_abilities);
			if candidates.is_empty() {
				return html!(<div class="small text-body-secondary">{format!("Choose an ability costing {}", data.cost)}</div>);
			}
			tags(
				candidates
					.into_iter()
					.map(|ability| (ability.id.clone(), ability.name.clone(), data.is_selected(&ability.id)))
					.collect(),
				data.is_complete(),
			)
		}
		FeatureKind::DamageModifier(data) => html! {
			<ul class="small mb-0">
				{data.modifiers.iter().map(|modifier| html!(<li>{modifier.description(*level)}</li>)).collect::<Vec<_>>()}
			</ul>
		},
		FeatureKind::Kit(data) => {
			let allowed = data.types.iter().map(|kind| kind.display_name().to_owned()).collect();
			html! {
				<>
					{list_as_english(allowed, "or").map(|allowed| html!(<div class="small">{"Kit types: "}{allowed}</div>))}
					{tags(
						data.selected.iter().map(|kit| (kit.id.clone(), kit.name.clone(), true)).collect(),
						data.is_complete(),
					)}
				</>
			}
		}
		FeatureKind::Language(data) => tags(
			data.options
				.iter()
				.map(|language| (language.clone(), language.clone(), data.is_selected(language)))
				.collect(),
			data.is_complete(),
		),
		FeatureKind::Size(data) => html!(<div class="small">{"Size "}{data.size.to_string()}</div>),
		FeatureKind::Skill(data) => tags(
			data.candidates()
				.into_iter()
				.map(|skill| {
					let active = data.is_selected(&skill);
					(skill.clone(), skill, active)
				})
				.collect(),
			data.is_complete(),
		),
		FeatureKind::Subclass(data) => html! {
			<>
				<div class="small">{&data.category}</div>
				{tags(
					data.selected.iter().map(|subclass| (subclass.id.clone(), subclass.name.clone(), true)).collect(),
					data.is_complete(),
				)}
			</>
		},
	}
}

/// The options of a selection as tags. Once the selection is full,
/// only the picked options stay clickable.
fn options(
	feature_id: &str,
	items: Vec<(String, String, bool)>,
	full: bool,
	on_toggle: Option<&Callback<(String, String)>>,
) -> Html {
	if items.is_empty() {
		return Html::default();
	}
	html! {
		<Tags classes="my-1">
			{items.into_iter().map(|(key, label, active)| {
				let on_click = on_toggle.map(|on_toggle| {
					let feature_id = feature_id.to_owned();
					on_toggle.reform(move |_: bool| (feature_id.clone(), key.clone()))
				});
				html! {
					<Tag {active} disabled={full && !active} {on_click}>{label}</Tag>
				}
			}).collect::<Vec<_>>()}
		</Tags>
	}
}
