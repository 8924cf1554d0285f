use crate::{
	components::{FeatureTree, HeroStatePanel, ImportPanel, Tag, Tags},
	page::app::Context,
	session::{self, Command},
	system::data::{
		Ability, Ancestry, Career, Characteristic, Complication, Culture, Feature, Hero, HeroClass,
		Kit,
	},
};
use enumset::EnumSet;
use yew::prelude::*;

#[derive(thiserror::Error, Debug)]
pub enum PanelError {
	#[error("{0} has no class, so there are no characteristic scores to show.")]
	NoClass(String),
}

/// The overlay slot. Shows whichever [`session::Drawer`] is open, if any.
#[function_component]
pub fn Drawer() -> Html {
	let context = use_context::<Context>().unwrap();
	let Some(drawer) = context.drawer().cloned() else {
		return Html::default();
	};
	let close = context.callback(|_: MouseEvent| Command::CloseDrawer);
	let body = match panel(&drawer) {
		Ok(html) => html,
		Err(err) => {
			log::error!(target: "drawer", "Failed to render {:?}: {err}", drawer.title());
			Html::default()
		}
	};
	html! {
		<div class="offcanvas offcanvas-end show drawer" tabindex="-1">
			<div class="offcanvas-header">
				<h5 class="offcanvas-title">{drawer.title()}</h5>
				<button type="button" class="btn-close" aria-label="Close" onclick={close} />
			</div>
			<div class="offcanvas-body">{body}</div>
		</div>
	}
}

fn panel(drawer: &session::Drawer) -> Result<Html, PanelError> {
	Ok(match drawer {
		session::Drawer::About => about(),
		session::Drawer::ImportHero => html!(<ImportPanel />),
		session::Drawer::Ancestry(ancestry) => ancestry_panel(ancestry),
		session::Drawer::Culture(culture) => culture_panel(culture),
		session::Drawer::Career(career) => career_panel(career),
		session::Drawer::Class(class) => class_panel(class),
		session::Drawer::Complication(complication) => complication_panel(complication),
		session::Drawer::Kit(kit) => kit_panel(kit),
		session::Drawer::Characteristic(characteristic, hero) => characteristic_panel(*characteristic, hero)?,
		session::Drawer::Ability(ability, hero) => ability_panel(ability, hero),
		session::Drawer::HeroState(hero) => html!(<HeroStatePanel hero={hero.clone()} />),
	})
}

fn about() -> Html {
	html! {
		<div>
			<p>{"Forge Steel is a hero builder for the Draw Steel tabletop role-playing game."}</p>
			<p>{"Heroes are stored in this browser only. Use the data export to keep a copy or move a hero to another device."}</p>
			<p class="text-body-secondary small">{format!("Version {}", env!("CARGO_PKG_VERSION"))}</p>
		</div>
	}
}

fn description(text: &str) -> Html {
	match text.is_empty() {
		true => Html::default(),
		false => html!(<p>{text}</p>),
	}
}

fn features<'a>(features: impl Iterator<Item = &'a Feature>, level: u32) -> Html {
	html! {
		<div class="features">
			{features.map(|feature| html!(<FeatureTree feature={feature.clone()} {level} />)).collect::<Vec<_>>()}
		</div>
	}
}

fn ancestry_panel(ancestry: &Ancestry) -> Html {
	html! {
		<>
			{description(&ancestry.description)}
			{features(ancestry.features.iter(), 1)}
		</>
	}
}

fn culture_panel(culture: &Culture) -> Html {
	html! {
		<>
			{description(&culture.description)}
			{(!culture.languages.is_empty()).then(|| html! {
				<p><strong>{"Languages: "}</strong>{culture.languages.join(", ")}</p>
			})}
			{features(culture.aspects(), 1)}
		</>
	}
}

fn career_panel(career: &Career) -> Html {
	html! {
		<>
			{description(&career.description)}
			{features(career.features.iter(), 1)}
			{career.inciting_incidents.selected().map(|incident| html! {
				<div class="mt-2">
					<h6>{"Inciting Incident: "}{&incident.name}</h6>
					{description(&incident.description)}
				</div>
			})}
		</>
	}
}

fn class_panel(class: &HeroClass) -> Html {
	let primary = class
		.primary_characteristics
		.iter()
		.map(|characteristic| characteristic.display_name())
		.collect::<Vec<_>>();
	html! {
		<>
			{description(&class.description)}
			<p><strong>{"Heroic Resource: "}</strong>{&class.heroic_resource}</p>
			{(!primary.is_empty()).then(|| html! {
				<p><strong>{"Primary Characteristics: "}</strong>{primary.join(", ")}</p>
			})}
			{(!class.subclasses.is_empty()).then(|| html! {
				<div class="mb-2">
					<strong>{&class.subclass_name}</strong>
					<Tags>
						{class.subclasses.iter().map(|subclass| html! {
							<Tag active={subclass.selected}>{subclass.name.clone()}</Tag>
						}).collect::<Vec<_>>()}
					</Tags>
				</div>
			})}
			{class.features_by_level.iter().map(|level| html! {
				<div class="level">
					<h6>{format!("Level {}", level.level)}</h6>
					{features(level.features.iter(), class.level)}
				</div>
			}).collect::<Vec<_>>()}
		</>
	}
}

fn complication_panel(complication: &Complication) -> Html {
	html! {
		<>
			{description(&complication.description)}
			{features(complication.features.iter(), 1)}
		</>
	}
}

fn kit_panel(kit: &Kit) -> Html {
	let stats = [
		("Stamina", kit.stamina),
		("Speed", kit.speed),
		("Stability", kit.stability),
		("Disengage", kit.disengage),
	];
	html! {
		<>
			{description(&kit.description)}
			<p class="small text-body-secondary">{kit.kind.display_name()}</p>
			{(!kit.armor.is_empty()).then(|| html!(<p><strong>{"Armor: "}</strong>{kit.armor.join(", ")}</p>))}
			{(!kit.weapon.is_empty()).then(|| html!(<p><strong>{"Weapons: "}</strong>{kit.weapon.join(", ")}</p>))}
			<table class="table table-sm w-auto">
				<tbody>
					{stats.into_iter().filter(|(_, value)| *value != 0).map(|(name, value)| html! {
						<tr><th>{name}</th><td>{format!("{value:+}")}</td></tr>
					}).collect::<Vec<_>>()}
				</tbody>
			</table>
			{features(kit.features.iter(), 1)}
		</>
	}
}

fn characteristic_panel(characteristic: Characteristic, hero: &Hero) -> Result<Html, PanelError> {
	let Some(class) = &hero.class else {
		return Err(PanelError::NoClass(hero.display_name().to_owned()));
	};
	let score = class.characteristics[characteristic];
	let users = class
		.abilities
		.iter()
		.filter(|ability| {
			let Some(power_roll) = &ability.power_roll else {
				return false;
			};
			power_roll.characteristic.contains(&characteristic)
		})
		.map(|ability| ability.name.clone())
		.collect::<Vec<_>>();
	let others = (EnumSet::<Characteristic>::all() - characteristic)
		.into_iter()
		.map(|other| format!("{} {:+}", other.abbreviation(), class.characteristics[other]))
		.collect::<Vec<_>>();
	Ok(html! {
		<>
			<div class="display-6">{format!("{score:+}")}</div>
			{description(characteristic.description())}
			<p class="small text-body-secondary">{others.join(" · ")}</p>
			{(!users.is_empty()).then(|| html! {
				<p><strong>{"Used by: "}</strong>{users.join(", ")}</p>
			})}
		</>
	})
}

fn ability_panel(ability: &Ability, hero: &Hero) -> Html {
	let bonus = ability.roll_bonus(|characteristic| hero.characteristic(characteristic));
	let usage = match ability.kind.free {
		true => format!("Free {}", ability.kind.usage.display_name()),
		false => ability.kind.usage.display_name().to_owned(),
	};
	html! {
		<>
			{description(&ability.description)}
			<Tags classes="mb-2">
				<Tag>{usage}</Tag>
				{ability.keywords.iter().map(|keyword| html!(<Tag>{keyword.clone()}</Tag>)).collect::<Vec<_>>()}
				{(ability.cost > 0).then(|| html!(<Tag>{format!("Cost {}", ability.cost)}</Tag>))}
			</Tags>
			{(!ability.kind.trigger.is_empty()).then(|| html!(<p><strong>{"Trigger: "}</strong>{&ability.kind.trigger}</p>))}
			{(!ability.distance.is_empty()).then(|| html!(<p><strong>{"Distance: "}</strong>{ability.distance.join(" or ")}</p>))}
			{(!ability.target.is_empty()).then(|| html!(<p><strong>{"Target: "}</strong>{&ability.target}</p>))}
			{ability.power_roll.as_ref().map(|power_roll| html! {
				<div class="power-roll">
					<strong>{format!("Power Roll {:+}", bonus.unwrap_or_default())}</strong>
					<ul class="mb-2">
						<li>{"≤11: "}{&power_roll.tier1}</li>
						<li>{"12-16: "}{&power_roll.tier2}</li>
						<li>{"17+: "}{&power_roll.tier3}</li>
					</ul>
				</div>
			})}
			{description(&ability.effect)}
		</>
	}
}
