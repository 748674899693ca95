//! Teacher dashboard page.

use core_types::{AssessmentStatus, Page, RosterEntry};
use yew::prelude::*;

use crate::components::{Breadcrumb, TabBar};
use crate::context::use_page_role;

const TABS: &[&str] = &["Lesson Planning", "Class Overview", "Assessments"];

const TOOLS: [(&str, &str, &str); 3] = [
    (
        "✅",
        "Progress Checklists",
        "Create and manage assessment checklists for different skills and milestones",
    ),
    (
        "📷",
        "Photo/Video Evidence",
        "Capture and organize visual evidence of student progress",
    ),
    (
        "🏆",
        "Milestone Tracking",
        "Track and celebrate student achievements and developmental milestones",
    ),
];

/// Teacher dashboard page component.
#[function_component(TeacherDashboardPage)]
pub fn teacher_dashboard_page() -> Html {
    let role = use_page_role(Page::TeacherDashboard);
    let tab = use_state(|| 0usize);

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |index: usize| tab.set(index))
    };

    let content = match *tab {
        0 => html! {
            <div>
                <h2>{"Weekly Schedule"}</h2>
                <button onclick={|_: MouseEvent| tracing::info!("add activity requested")}>
                    {"+ Add Activity"}
                </button>
                <div class="card">
                    <p class="meta">{"Drag and drop activities to plan your week"}</p>
                </div>
            </div>
        },
        1 => html! {
            <div>
                <h2>{"Class Overview"}</h2>
                <div class="grid">
                    { for mock_data::load_roster().into_iter().map(|student| {
                        let key = student.id.clone();
                        html! { <RosterCard key={key} {student} /> }
                    })}
                </div>
            </div>
        },
        _ => html! {
            <div>
                <h2>{"Assessment Tools"}</h2>
                <div class="grid">
                    { for TOOLS.iter().map(|(icon, title, description)| html! {
                        <div class="card" key={*title}>
                            <h3>{ format!("{icon} {title}") }</h3>
                            <p>{ *description }</p>
                        </div>
                    })}
                </div>
            </div>
        },
    };

    html! {
        <div>
            <Breadcrumb page={Page::TeacherDashboard} {role} />
            <div class="card">
                <TabBar tabs={TABS} active={*tab} on_select={on_tab} />
                { content }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RosterCardProps {
    student: RosterEntry,
}

#[function_component(RosterCard)]
fn roster_card(props: &RosterCardProps) -> Html {
    let student = &props.student;
    let participation = format!("width: {}%; background: #4A90E2;", student.participation);

    html! {
        <div class="card">
            <div style="display: flex; gap: 1rem; align-items: center;">
                <img class="avatar" src={student.avatar.clone()} alt={student.name.clone()} />
                <div>
                    <h3>{ &student.name }</h3>
                    <span class="chip" style={format!("background: {};", student.behavior.color())}>
                        { student.behavior.as_str() }
                    </span>
                </div>
            </div>
            <p>{"Participation"}</p>
            <div class="progress-bar">
                <div style={participation}></div>
            </div>
            <p>{"Recent Assessments"}</p>
            { for student.recent_assessments.iter().map(|assessment| {
                let (icon, background) = match assessment.status {
                    AssessmentStatus::Completed => ("✔", "#E3F2FD"),
                    AssessmentStatus::Pending => ("📷", "#FFF3E0"),
                };
                html! {
                    <span class="chip" style={format!("background: {background};")}>
                        { format!("{icon} {}", assessment.kind) }
                    </span>
                }
            })}
        </div>
    }
}
