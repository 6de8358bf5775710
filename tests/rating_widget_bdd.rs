//! Behavioural tests for the rating widget state machine.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use starboard::page::{FormSpec, SubmitControl};
use starboard::{
    Average, Effect, ItemId, RatingContainer, RatingDisplay, RatingError, RatingWidget,
    Registration, SubmissionRequest, SubmissionResult, WidgetEvent, WidgetRegistry,
};

/// State shared across steps in a widget scenario.
#[derive(ScenarioState, Default)]
struct WidgetState {
    containers: Slot<Vec<RatingContainer>>,
    displays: Slot<Vec<RatingDisplay>>,
    registry: Slot<WidgetRegistry>,
    registration: Slot<Registration>,
    sent: Slot<Vec<SubmissionRequest>>,
}

#[fixture]
fn widget_state() -> WidgetState {
    WidgetState::default()
}

fn rating_container(item: &str) -> RatingContainer {
    RatingContainer::new(ItemId::new(item))
        .with_form(FormSpec::new(format!("/movies/{item}/rate/")))
        .with_submit(SubmitControl::new("Rate"))
        .with_feedback()
}

fn push_container(widget_state: &WidgetState, container: RatingContainer) {
    let mut containers = widget_state.containers.take().unwrap_or_default();
    containers.push(container);
    widget_state.containers.set(containers);
}

#[expect(clippy::expect_used, reason = "BDD test helper; panics are acceptable")]
fn dispatch(widget_state: &WidgetState, event: WidgetEvent) {
    let registration = widget_state.registration.get().expect("page not wired");
    let effects = widget_state
        .registry
        .with_mut(|registry| registry.dispatch(registration, event))
        .expect("page not wired");

    let mut sent = widget_state.sent.take().unwrap_or_default();
    sent.extend(effects.into_iter().filter_map(|effect| match effect {
        Effect::Send(request) => Some(request),
        _ => None,
    }));
    widget_state.sent.set(sent);
}

#[expect(clippy::expect_used, reason = "BDD test helper; panics are acceptable")]
fn with_widget<T>(widget_state: &WidgetState, read: impl FnOnce(&RatingWidget) -> T) -> T {
    let registration = widget_state.registration.get().expect("page not wired");
    widget_state
        .registry
        .with_ref(|registry| registry.widget(registration).map(read))
        .flatten()
        .expect("widget should be registered")
}

// Given steps

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("an unrated container for item {item}")]
fn given_unrated_container(widget_state: &WidgetState, item: String) {
    push_container(widget_state, rating_container(&item));
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a container for item {item} pre-rated at {value:u8}")]
fn given_pre_rated_container(widget_state: &WidgetState, item: String, value: u8) {
    push_container(
        widget_state,
        rating_container(&item).with_hidden_value(value.to_string()),
    );
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a display for item {item} showing average {average} and count {count:u64}")]
fn given_display(
    widget_state: &WidgetState,
    item: String,
    average: String,
    count: u64,
) -> Result<(), String> {
    let parsed = Average::parse(&average).ok_or_else(|| format!("bad average: {average}"))?;
    let mut displays = widget_state.displays.take().unwrap_or_default();
    displays.push(RatingDisplay::new(ItemId::new(item), &parsed, count));
    widget_state.displays.set(displays);
    Ok(())
}

// When steps

#[when("the page is wired")]
fn when_page_is_wired(widget_state: &WidgetState) -> Result<(), String> {
    let containers = widget_state.containers.take().unwrap_or_default();
    let displays = widget_state.displays.take().unwrap_or_default();
    let (registry, registrations) = WidgetRegistry::initialize(containers, displays);
    let first = registrations
        .first()
        .copied()
        .ok_or_else(|| "page has no containers".to_owned())?;
    widget_state.registry.set(registry);
    widget_state.registration.set(first);
    Ok(())
}

#[when("star {position:u8} is clicked")]
fn when_star_clicked(widget_state: &WidgetState, position: u8) {
    dispatch(widget_state, WidgetEvent::Activate { position });
}

#[when("the pointer hovers star {position:u8}")]
fn when_pointer_hovers(widget_state: &WidgetState, position: u8) {
    dispatch(widget_state, WidgetEvent::HoverEnter { position });
}

#[when("the pointer leaves the stars")]
fn when_pointer_leaves(widget_state: &WidgetState) {
    dispatch(widget_state, WidgetEvent::HoverLeave);
}

#[when("the form is submitted")]
fn when_form_submitted(widget_state: &WidgetState) {
    dispatch(widget_state, WidgetEvent::Submit);
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the server saves item {item} with average {average} from {count:u64} ratings")]
fn when_server_saves(
    widget_state: &WidgetState,
    item: String,
    average: String,
    count: u64,
) -> Result<(), String> {
    let parsed = Average::parse(&average).ok_or_else(|| format!("bad average: {average}"))?;
    let result = SubmissionResult {
        item_id: ItemId::new(item),
        average: parsed,
        count,
    };
    dispatch(widget_state, WidgetEvent::SubmissionFinished(Ok(result)));
    Ok(())
}

#[when("the server rejects the rating with status {status:u16}")]
fn when_server_rejects(widget_state: &WidgetState, status: u16) {
    dispatch(
        widget_state,
        WidgetEvent::SubmissionFinished(Err(RatingError::Rejected { status })),
    );
}

// Then steps

#[then("{count:usize} stars are filled")]
fn then_stars_filled(widget_state: &WidgetState, count: usize) {
    let filled = with_widget(widget_state, |widget| widget.container().filled_count());
    assert_eq!(filled, count, "filled star count mismatch");
}

#[then("the hidden value is {value:u8}")]
fn then_hidden_value(widget_state: &WidgetState, value: u8) {
    let pending = with_widget(widget_state, |widget| widget.container().pending());
    assert_eq!(pending, value, "hidden value mismatch");
}

#[then("the submit control is hidden")]
fn then_submit_hidden(widget_state: &WidgetState) {
    let visible = with_widget(widget_state, |widget| {
        widget.container().submit().is_some_and(SubmitControl::is_visible)
    });
    assert!(!visible, "submit control should be hidden");
}

#[then("the submit control is visible")]
fn then_submit_visible(widget_state: &WidgetState) {
    let visible = with_widget(widget_state, |widget| {
        widget.container().submit().is_some_and(SubmitControl::is_visible)
    });
    assert!(visible, "submit control should be visible");
}

#[then("the submit control is busy")]
fn then_submit_busy(widget_state: &WidgetState) {
    let (disabled, label) = with_widget(widget_state, |widget| {
        widget.container().submit().map_or((false, String::new()), |submit| {
            (submit.is_disabled(), submit.label().to_owned())
        })
    });
    assert!(disabled, "submit control should be disabled");
    assert_eq!(label, starboard::page::BUSY_LABEL);
}

#[then("the submit control is enabled")]
fn then_submit_enabled(widget_state: &WidgetState) {
    let (disabled, label) = with_widget(widget_state, |widget| {
        widget.container().submit().map_or((true, String::new()), |submit| {
            (submit.is_disabled(), submit.label().to_owned())
        })
    });
    assert!(!disabled, "submit control should be enabled");
    assert_eq!(label, "Rate", "original label should be restored");
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
#[then("every display for item {item} shows {average} and {count}")]
fn then_displays_show(widget_state: &WidgetState, item: String, average: String, count: String) {
    let item_id = ItemId::new(item);
    let shown: Vec<(String, String)> = widget_state
        .registry
        .with_ref(|registry| {
            registry
                .board()
                .displays_for(&item_id)
                .map(|display| {
                    (
                        display.average_text().to_owned(),
                        display.count_text().to_owned(),
                    )
                })
                .collect()
        })
        .expect("page not wired");

    assert!(!shown.is_empty(), "no displays for item {item_id}");
    for (shown_average, shown_count) in shown {
        assert_eq!(shown_average, average);
        assert_eq!(shown_count, count);
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the feedback reads {text}")]
fn then_feedback_reads(widget_state: &WidgetState, text: String) {
    let shown = with_widget(widget_state, |widget| {
        widget
            .container()
            .feedback()
            .and_then(|region| region.message())
            .map(|message| message.text.clone())
    });
    assert_eq!(shown.as_deref(), Some(text.as_str()));
}

#[then("no request was sent")]
fn then_no_request(widget_state: &WidgetState) {
    let sent = widget_state.sent.take().unwrap_or_default();
    assert!(sent.is_empty(), "expected no requests, got {sent:?}");
}

// Scenario bindings

#[scenario(path = "tests/features/rating_widget.feature", index = 0)]
fn pre_populated_value_is_shown(widget_state: WidgetState) {
    let _ = widget_state;
}

#[scenario(path = "tests/features/rating_widget.feature", index = 1)]
fn clicking_commits_rating(widget_state: WidgetState) {
    let _ = widget_state;
}

#[scenario(path = "tests/features/rating_widget.feature", index = 2)]
fn hover_previews_without_committing(widget_state: WidgetState) {
    let _ = widget_state;
}

#[scenario(path = "tests/features/rating_widget.feature", index = 3)]
fn saved_rating_refreshes_displays(widget_state: WidgetState) {
    let _ = widget_state;
}

#[scenario(path = "tests/features/rating_widget.feature", index = 4)]
fn rejected_rating_restores_control(widget_state: WidgetState) {
    let _ = widget_state;
}

#[scenario(path = "tests/features/rating_widget.feature", index = 5)]
fn submit_without_rating_sends_nothing(widget_state: WidgetState) {
    let _ = widget_state;
}
