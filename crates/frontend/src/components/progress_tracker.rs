//! Developmental progress card.

use core_types::ProgressRecord;
use yew::prelude::*;

/// Properties for ProgressTracker component.
#[derive(Properties, PartialEq)]
pub struct ProgressTrackerProps {
    pub record: ProgressRecord,
}

/// Level bar, trend arrow and milestone checklist for one area.
#[function_component(ProgressTracker)]
pub fn progress_tracker(props: &ProgressTrackerProps) -> Html {
    let record = &props.record;
    let bar_style = format!(
        "width: {:.0}%; background: {};",
        record.percent(),
        record.bar_color()
    );

    html! {
        <div class="card">
            <h3>
                { &record.category }
                if let Some((arrow, color)) = record.trend.arrow() {
                    <span style={format!("color: {color}; margin-left: 0.5rem;")}>{ arrow }</span>
                }
            </h3>
            <p>{ format!("Level {} of {}", record.current_level, record.max_level) }</p>
            <div class="progress-bar">
                <div style={bar_style}></div>
            </div>
            <ul>
                { for record.milestones.iter().map(|milestone| {
                    let (class, mark) = if milestone.achieved {
                        ("milestone achieved", "✔")
                    } else {
                        ("milestone pending", "○")
                    };
                    html! {
                        <li key={milestone.title.clone()} {class}>
                            { format!("{mark} {}", milestone.title) }
                        </li>
                    }
                })}
            </ul>
            <p class="meta">
                { format!("Last updated: {}", record.last_updated.format("%b %-d, %Y")) }
            </p>
        </div>
    }
}
