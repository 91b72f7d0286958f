use std::rc::Rc;

use gloo_net::http::Request;
use log::{info, warn};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::error::WaitlistError;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WaitlistRequest {
    pub email: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WaitlistPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
    Failed,
}

pub enum WaitlistAction {
    SetEmail(String),
    Submit,
    Completed {
        attempt: u32,
        result: Result<(), WaitlistError>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaitlistState {
    pub email: String,
    pub phase: WaitlistPhase,
    /// Bumped once per accepted submit. Exactly one request goes out per value.
    pub attempt: u32,
    pub error: Option<WaitlistError>,
}

impl WaitlistState {
    pub fn apply(&self, action: WaitlistAction) -> Self {
        let mut next = self.clone();
        match action {
            WaitlistAction::SetEmail(email) => {
                if self.accepts_input() {
                    next.email = email;
                    next.error = None;
                }
            }
            WaitlistAction::Submit => {
                if !self.accepts_input() {
                    return next;
                }
                // Deliberately loose: anything with an @ goes through.
                if !self.email.contains('@') {
                    next.error = Some(WaitlistError::InvalidEmail);
                    return next;
                }
                next.phase = WaitlistPhase::Submitting;
                next.attempt += 1;
                next.error = None;
            }
            WaitlistAction::Completed { attempt, result } => {
                if self.phase != WaitlistPhase::Submitting || attempt != self.attempt {
                    return next;
                }
                match result {
                    Ok(()) => next.phase = WaitlistPhase::Submitted,
                    Err(e) => {
                        next.phase = WaitlistPhase::Failed;
                        next.error = Some(e);
                    }
                }
            }
        }
        next
    }

    fn accepts_input(&self) -> bool {
        matches!(self.phase, WaitlistPhase::Editing | WaitlistPhase::Failed)
    }

    pub fn is_loading(&self) -> bool {
        self.phase == WaitlistPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == WaitlistPhase::Submitted
    }

    /// The request to send for the current attempt, if one is in flight.
    pub fn pending_request(&self) -> Option<WaitlistRequest> {
        self.is_loading().then(|| WaitlistRequest { email: self.email.clone() })
    }
}

impl Reducible for WaitlistState {
    type Action = WaitlistAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

pub type WaitlistContext = UseReducerHandle<WaitlistState>;

async fn post_signup(request: &WaitlistRequest) -> Result<(), WaitlistError> {
    let response = Request::post(config::waitlist_endpoint())
        .header("Accept", "application/json")
        .json(request)
        .map_err(|e| WaitlistError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| WaitlistError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(WaitlistError::Status(response.status()))
    }
}

#[derive(Properties, PartialEq)]
pub struct WaitlistProviderProps {
    pub children: Children,
}

/// Owns the one waitlist state every email form on the page shares, and
/// sends the sign-up whenever a new attempt is accepted.
#[function_component(WaitlistProvider)]
pub fn waitlist_provider(props: &WaitlistProviderProps) -> Html {
    let state = use_reducer(WaitlistState::default);
    let attempt = state.attempt;

    {
        let state = state.clone();
        use_effect_with_deps(
            move |attempt: &u32| {
                if let Some(request) = state.pending_request() {
                    let attempt = *attempt;
                    let dispatcher = state.dispatcher();
                    spawn_local(async move {
                        info!("Joining waitlist, attempt {}", attempt);
                        let result = post_signup(&request).await;
                        if let Err(e) = &result {
                            warn!("Waitlist sign-up failed: {}", e);
                        }
                        dispatcher.dispatch(WaitlistAction::Completed { attempt, result });
                    });
                }
                || ()
            },
            attempt,
        );
    }

    html! {
        <ContextProvider<WaitlistContext> context={state}>
            { for props.children.iter() }
        </ContextProvider<WaitlistContext>>
    }
}

#[function_component(EmailForm)]
pub fn email_form() -> Html {
    let waitlist = use_context::<WaitlistContext>();
    let Some(waitlist) = waitlist else {
        warn!("EmailForm rendered outside WaitlistProvider");
        return html! {};
    };

    if waitlist.is_submitted() {
        return html! {
            <div class="waitlist-confirmation">
                <span class="check">{"✓"}</span>
                <span>{"You're on the list! We'll notify you when we launch."}</span>
            </div>
        };
    }

    let oninput = {
        let waitlist = waitlist.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            waitlist.dispatch(WaitlistAction::SetEmail(input.value()));
        })
    };

    let onsubmit = {
        let waitlist = waitlist.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            waitlist.dispatch(WaitlistAction::Submit);
        })
    };

    let loading = waitlist.is_loading();

    html! {
        <div class="waitlist-form-wrapper">
            <form class="waitlist-form" onsubmit={onsubmit} novalidate=true>
                <input
                    type="email"
                    class="waitlist-input"
                    placeholder="Enter your email"
                    value={waitlist.email.clone()}
                    oninput={oninput}
                />
                <button
                    type="submit"
                    class={classes!("waitlist-button", loading.then(|| "loading"))}
                    disabled={loading}
                >
                    { if loading { "Joining..." } else { "Get Early Access" } }
                </button>
            </form>
            if let Some(error) = &waitlist.error {
                <p class="form-hint" role="alert">{ error.user_message() }</p>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(email: &str) -> WaitlistState {
        WaitlistState::default().apply(WaitlistAction::SetEmail(email.to_string()))
    }

    #[test]
    fn email_is_stored_verbatim() {
        assert_eq!(typed("  Person@Example.COM ").email, "  Person@Example.COM ");
    }

    #[test]
    fn address_without_at_is_rejected_locally() {
        let state = typed("not-an-email").apply(WaitlistAction::Submit);
        assert_eq!(state.phase, WaitlistPhase::Editing);
        assert_eq!(state.attempt, 0);
        assert_eq!(state.pending_request(), None);
        assert_eq!(state.error, Some(WaitlistError::InvalidEmail));
    }

    #[test]
    fn valid_address_moves_to_submitting_with_one_request() {
        let state = typed("person@example.com").apply(WaitlistAction::Submit);
        assert_eq!(state.phase, WaitlistPhase::Submitting);
        assert!(state.is_loading());
        assert_eq!(state.attempt, 1);
        assert_eq!(state.error, None);

        let request = state.pending_request().unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"email":"person@example.com"}"#
        );
    }

    #[test]
    fn success_ends_in_submitted() {
        let state = typed("person@example.com")
            .apply(WaitlistAction::Submit)
            .apply(WaitlistAction::Completed { attempt: 1, result: Ok(()) });
        assert_eq!(state.phase, WaitlistPhase::Submitted);
        assert!(!state.is_loading());
        assert_eq!(state.pending_request(), None);
    }

    #[test]
    fn resubmitting_while_loading_is_ignored() {
        let first = typed("person@example.com").apply(WaitlistAction::Submit);
        let second = first.apply(WaitlistAction::Submit);
        assert_eq!(second, first);
        assert_eq!(second.attempt, 1);
    }

    #[test]
    fn typing_while_loading_does_not_change_the_request() {
        let state = typed("person@example.com")
            .apply(WaitlistAction::Submit)
            .apply(WaitlistAction::SetEmail("other@example.com".into()));
        assert_eq!(state.pending_request().unwrap().email, "person@example.com");
    }

    #[test]
    fn submitted_form_never_reopens() {
        let done = typed("person@example.com")
            .apply(WaitlistAction::Submit)
            .apply(WaitlistAction::Completed { attempt: 1, result: Ok(()) });
        let after = done
            .apply(WaitlistAction::SetEmail("x@y".into()))
            .apply(WaitlistAction::Submit)
            .apply(WaitlistAction::Completed { attempt: 1, result: Err(WaitlistError::Status(500)) });
        assert_eq!(after, done);
    }

    #[test]
    fn failure_is_reported_and_retry_sends_again() {
        let failed = typed("person@example.com")
            .apply(WaitlistAction::Submit)
            .apply(WaitlistAction::Completed {
                attempt: 1,
                result: Err(WaitlistError::Network("offline".into())),
            });
        assert_eq!(failed.phase, WaitlistPhase::Failed);
        assert_eq!(failed.error, Some(WaitlistError::Network("offline".into())));
        assert!(!failed.is_submitted());

        let retry = failed.apply(WaitlistAction::Submit);
        assert_eq!(retry.phase, WaitlistPhase::Submitting);
        assert_eq!(retry.attempt, 2);
        assert_eq!(retry.error, None);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let retrying = typed("person@example.com")
            .apply(WaitlistAction::Submit)
            .apply(WaitlistAction::Completed { attempt: 1, result: Err(WaitlistError::Status(502)) })
            .apply(WaitlistAction::Submit);
        let late = retrying.apply(WaitlistAction::Completed { attempt: 1, result: Ok(()) });
        assert_eq!(late, retrying);
    }

    #[test]
    fn typing_clears_a_previous_hint() {
        let rejected = typed("not-an-email").apply(WaitlistAction::Submit);
        assert_eq!(rejected.error, Some(WaitlistError::InvalidEmail));
        let fixing = rejected.apply(WaitlistAction::SetEmail("not-an-email@".into()));
        assert_eq!(fixing.error, None);
        assert_eq!(fixing.phase, WaitlistPhase::Editing);

        let failed = typed("person@example.com")
            .apply(WaitlistAction::Submit)
            .apply(WaitlistAction::Completed { attempt: 1, result: Err(WaitlistError::Status(503)) });
        let retyped = failed.apply(WaitlistAction::SetEmail("person@example.org".into()));
        assert_eq!(retyped.error, None);
        assert_eq!(retyped.phase, WaitlistPhase::Failed);
    }

    #[test]
    fn completion_without_submit_is_ignored() {
        let state = typed("person@example.com");
        let after = state.apply(WaitlistAction::Completed { attempt: 0, result: Ok(()) });
        assert_eq!(after.phase, WaitlistPhase::Editing);
    }
}
