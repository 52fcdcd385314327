use tracing::debug;

use api::{
    collection::{AddCollectionResp, Collection},
    error::{ErrorKind, api_error},
    validate_collection_name,
};

// create-collection orchestrator
//
// the modal, the form and the in-flight create request are one state machine
// owned by the collections page.  every transition is a method here, and the
// page only performs the effects the transitions hand back: starting the
// request, and refreshing the list once a collection exists.
//
//   Idle -> ModalOpen -> Submitting -> Idle
//                 ^           |
//                 |           v
//                 +---- ErrorRecovery
//
// a submission is identified by its ticket; a result for any ticket other than
// the one currently in flight (because the user cancelled, or cancelled and
// submitted again) is not applied to the form.

pub type SubmissionTicket = u64;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectionForm {
    pub name: String,
    // shown under the name input
    pub name_error: Option<String>,
    // shown in the modal footer, for failures that are not about the name
    pub form_error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Idle,
    ModalOpen,
    Submitting {
        ticket: SubmissionTicket,
        modal_visible: bool,
    },
    ErrorRecovery,
}

// what the create request came back with, boiled down to what the form needs
#[derive(Clone, Debug, PartialEq)]
pub enum CreateOutcome {
    Created(Collection),
    DuplicateName { name: String, message: String },
    Invalid(String),
    Failed(String),
}

impl CreateOutcome {
    pub fn from_result(name: &str, result: anyhow::Result<AddCollectionResp>) -> Self {
        let err = match result {
            Ok(resp) => return CreateOutcome::Created(resp.collection),
            Err(err) => err,
        };

        match api_error(&err) {
            Some(api_err) if api_err.kind == ErrorKind::DuplicateName => {
                CreateOutcome::DuplicateName {
                    name: name.to_owned(),
                    message: api_err.message.clone(),
                }
            }
            Some(api_err) if api_err.kind == ErrorKind::Validation => {
                CreateOutcome::Invalid(api_err.message.clone())
            }
            _ => CreateOutcome::Failed(err.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    // start the create request, then feed the outcome to resolve()
    Submit {
        ticket: SubmissionTicket,
        name: String,
    },
    // re-query the collection list
    RefreshList,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CreationConfig {
    // hide the modal as soon as the request is sent, reopening it only if
    // the request fails
    pub optimistic_close: bool,
}

impl Default for CreationConfig {
    fn default() -> Self {
        CreationConfig {
            optimistic_close: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreationMachine {
    config: CreationConfig,
    phase: Phase,
    form: CollectionForm,
    last_ticket: SubmissionTicket,
}

impl CreationMachine {
    pub fn new(config: CreationConfig) -> Self {
        CreationMachine {
            config,
            phase: Phase::Idle,
            form: CollectionForm::default(),
            last_ticket: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn form(&self) -> &CollectionForm {
        &self.form
    }

    pub fn modal_open(&self) -> bool {
        match self.phase {
            Phase::Idle => false,
            Phase::ModalOpen | Phase::ErrorRecovery => true,
            Phase::Submitting { modal_visible, .. } => modal_visible,
        }
    }

    pub fn submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    // the create button, the hotkey, and retry all land here
    pub fn open(&mut self) {
        match self.phase {
            Phase::Idle => {
                self.form = CollectionForm::default();
                self.phase = Phase::ModalOpen;
                debug!("opened create collection modal");
            }
            // bring back a modal that was closed optimistically; it still
            // shows the pending request
            Phase::Submitting {
                ticket,
                modal_visible: false,
            } => {
                self.phase = Phase::Submitting {
                    ticket,
                    modal_visible: true,
                };
            }
            _ => (),
        }
    }

    pub fn edit_name(&mut self, name: String) {
        match self.phase {
            Phase::ModalOpen | Phase::ErrorRecovery => {
                self.form.name = name;
                self.form.name_error = None;
                self.phase = Phase::ModalOpen;
            }
            // the input is disabled while a request is in flight
            Phase::Idle | Phase::Submitting { .. } => (),
        }
    }

    pub fn confirm(&mut self) -> Option<Effect> {
        if !matches!(self.phase, Phase::ModalOpen | Phase::ErrorRecovery) {
            return None;
        }

        if let Err(message) = validate_collection_name(&self.form.name) {
            self.form.name_error = Some(message);
            self.phase = Phase::ModalOpen;
            return None;
        }

        self.last_ticket += 1;

        let ticket = self.last_ticket;

        self.form.name_error = None;
        self.form.form_error = None;
        self.phase = Phase::Submitting {
            ticket,
            modal_visible: !self.config.optimistic_close,
        };

        debug!({ ticket = ticket }, "submitting new collection");

        Some(Effect::Submit {
            ticket,
            name: self.form.name.clone(),
        })
    }

    // cancel and close are the same thing; neither contacts the server, and a
    // request that is already in flight is abandoned
    pub fn cancel(&mut self) {
        if let Phase::Submitting { ticket, .. } = self.phase {
            debug!({ ticket = ticket }, "abandoning in-flight collection request");
        }

        self.form = CollectionForm::default();
        self.phase = Phase::Idle;
    }

    pub fn resolve(&mut self, ticket: SubmissionTicket, outcome: CreateOutcome) -> Vec<Effect> {
        let current = matches!(
            self.phase,
            Phase::Submitting { ticket: t, .. } if t == ticket
        );

        if !current {
            debug!({ ticket = ticket }, "ignoring result of abandoned request");

            // the form stays as the user left it, but the list should still
            // show what the server has
            return match outcome {
                CreateOutcome::Created(_) => vec![Effect::RefreshList],
                _ => Vec::new(),
            };
        }

        match outcome {
            CreateOutcome::Created(collection) => {
                debug!(
                    { ticket = ticket, collection_uuid = collection.collection_uuid },
                    "collection created"
                );

                // close the modal and clear the form before the list is refreshed
                self.phase = Phase::Idle;
                self.form = CollectionForm::default();

                vec![Effect::RefreshList]
            }
            CreateOutcome::DuplicateName { name, message } => {
                self.recover(name, Some(message), None);
                Vec::new()
            }
            CreateOutcome::Invalid(message) => {
                let name = self.form.name.clone();
                self.recover(name, Some(message), None);
                Vec::new()
            }
            CreateOutcome::Failed(message) => {
                let name = self.form.name.clone();
                self.recover(
                    name,
                    None,
                    Some(format!("Could not create collection: {message}")),
                );
                Vec::new()
            }
        }
    }

    // force the modal open with the rejected name so it can be fixed and resubmitted
    fn recover(&mut self, name: String, name_error: Option<String>, form_error: Option<String>) {
        self.form = CollectionForm {
            name,
            name_error,
            form_error,
        };
        self.phase = Phase::ErrorRecovery;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::error::ApiError;

    fn machine(optimistic_close: bool) -> CreationMachine {
        CreationMachine::new(CreationConfig { optimistic_close })
    }

    fn collection(name: &str) -> Collection {
        Collection {
            collection_uuid: 7,
            uid: String::from("alice"),
            name: name.to_owned(),
            mtime: 0,
        }
    }

    fn submit(m: &mut CreationMachine, name: &str) -> SubmissionTicket {
        m.open();
        m.edit_name(name.to_owned());

        match m.confirm() {
            Some(Effect::Submit { ticket, name: sent }) => {
                assert_eq!(sent, name);
                ticket
            }
            other => panic!("expected a submit effect, got {other:?}"),
        }
    }

    #[test]
    fn opens_with_a_fresh_form() {
        let mut m = machine(true);
        assert_eq!(m.phase(), &Phase::Idle);
        assert!(!m.modal_open());

        m.open();
        assert_eq!(m.phase(), &Phase::ModalOpen);
        assert!(m.modal_open());
        assert_eq!(m.form(), &CollectionForm::default());

        // a second press does not reset what was typed
        m.edit_name(String::from("Wo"));
        m.open();
        assert_eq!(m.form().name, "Wo");
    }

    #[test]
    fn invalid_names_never_submit() {
        let mut m = machine(true);
        m.open();
        m.edit_name(String::from("   "));

        assert_eq!(m.confirm(), None);
        assert_eq!(m.phase(), &Phase::ModalOpen);
        assert_eq!(
            m.form().name_error.as_deref(),
            Some("Collection name is required")
        );

        // typing clears the field error
        m.edit_name(String::from("W"));
        assert_eq!(m.form().name_error, None);
    }

    #[test]
    fn success_closes_clears_and_refreshes() {
        let mut m = machine(false);
        let ticket = submit(&mut m, "Work");

        assert!(m.submitting());
        assert!(m.modal_open());

        // confirm is disabled while submitting
        assert_eq!(m.confirm(), None);

        let effects = m.resolve(ticket, CreateOutcome::Created(collection("Work")));

        assert_eq!(effects, vec![Effect::RefreshList]);
        assert_eq!(m.phase(), &Phase::Idle);
        assert!(!m.modal_open());
        assert_eq!(m.form(), &CollectionForm::default());
    }

    #[test]
    fn optimistic_close_hides_the_modal_while_submitting() {
        let mut m = machine(true);
        let ticket = submit(&mut m, "Work");

        assert!(!m.modal_open());
        assert_eq!(
            m.phase(),
            &Phase::Submitting {
                ticket,
                modal_visible: false
            }
        );

        // reopening shows the pending request rather than a new form
        m.open();
        assert!(m.modal_open());
        assert!(m.submitting());
        assert_eq!(m.form().name, "Work");
    }

    #[test]
    fn duplicate_name_reopens_with_the_rejected_value() {
        let mut m = machine(true);
        let ticket = submit(&mut m, " Work");
        assert!(!m.modal_open());

        let effects = m.resolve(
            ticket,
            CreateOutcome::DuplicateName {
                name: String::from(" Work"),
                message: String::from("A collection named \"Work\" already exists"),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(m.phase(), &Phase::ErrorRecovery);
        assert!(m.modal_open());
        assert_eq!(m.form().name, " Work");
        assert!(m.form().name_error.is_some());

        // editing moves back to ModalOpen, and the user can resubmit
        m.edit_name(String::from("Work 2"));
        assert_eq!(m.phase(), &Phase::ModalOpen);
        assert!(matches!(m.confirm(), Some(Effect::Submit { .. })));
    }

    #[test]
    fn resubmitting_from_error_recovery_is_allowed() {
        let mut m = machine(false);
        let ticket = submit(&mut m, "Work");

        m.resolve(
            ticket,
            CreateOutcome::DuplicateName {
                name: String::from("Work"),
                message: String::from("taken"),
            },
        );

        match m.confirm() {
            Some(Effect::Submit { ticket: next, name }) => {
                assert!(next > ticket);
                assert_eq!(name, "Work");
            }
            other => panic!("expected a submit effect, got {other:?}"),
        }
    }

    #[test]
    fn other_failures_keep_the_form() {
        let mut m = machine(true);
        let ticket = submit(&mut m, "Work");

        let effects = m.resolve(ticket, CreateOutcome::Failed(String::from("connection reset")));

        assert!(effects.is_empty());
        assert!(m.modal_open());
        assert_eq!(m.form().name, "Work");
        assert_eq!(m.form().name_error, None);
        assert_eq!(
            m.form().form_error.as_deref(),
            Some("Could not create collection: connection reset")
        );
    }

    #[test]
    fn cancel_never_submits() {
        let mut m = machine(true);
        m.open();
        m.edit_name(String::from("Work"));
        m.cancel();

        assert_eq!(m.phase(), &Phase::Idle);
        assert_eq!(m.form(), &CollectionForm::default());

        // nothing is in flight, so a stray result changes nothing
        assert!(m.resolve(1, CreateOutcome::Failed(String::from("x"))).is_empty());
        assert_eq!(m.phase(), &Phase::Idle);
    }

    #[test]
    fn results_after_cancel_are_not_applied() {
        let mut m = machine(false);
        let ticket = submit(&mut m, "Work");

        m.cancel();
        assert!(!m.submitting());
        assert!(!m.modal_open());

        let effects = m.resolve(
            ticket,
            CreateOutcome::DuplicateName {
                name: String::from("Work"),
                message: String::from("taken"),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(m.phase(), &Phase::Idle);

        // a late success still refreshes the list, but leaves the modal alone
        let ticket = submit(&mut m, "Home");
        m.cancel();
        m.open();

        let effects = m.resolve(ticket, CreateOutcome::Created(collection("Home")));
        assert_eq!(effects, vec![Effect::RefreshList]);
        assert_eq!(m.phase(), &Phase::ModalOpen);
    }

    #[test]
    fn stale_tickets_do_not_clobber_newer_submissions() {
        let mut m = machine(false);
        let first = submit(&mut m, "Work");
        m.cancel();
        let second = submit(&mut m, "Home");

        m.resolve(first, CreateOutcome::Failed(String::from("timeout")));
        assert_eq!(
            m.phase(),
            &Phase::Submitting {
                ticket: second,
                modal_visible: true
            }
        );
    }

    #[test]
    fn classifies_api_errors() {
        let duplicate: anyhow::Result<AddCollectionResp> =
            Err(ApiError::duplicate_name("Work").into());
        assert_eq!(
            CreateOutcome::from_result("Work", duplicate),
            CreateOutcome::DuplicateName {
                name: String::from("Work"),
                message: String::from("A collection named \"Work\" already exists"),
            }
        );

        let invalid: anyhow::Result<AddCollectionResp> =
            Err(ApiError::new(ErrorKind::Validation, "too long").into());
        assert_eq!(
            CreateOutcome::from_result("x", invalid),
            CreateOutcome::Invalid(String::from("too long"))
        );

        let transport: anyhow::Result<AddCollectionResp> =
            Err(anyhow::Error::msg("network unreachable"));
        assert_eq!(
            CreateOutcome::from_result("x", transport),
            CreateOutcome::Failed(String::from("network unreachable"))
        );

        let created: anyhow::Result<AddCollectionResp> = Ok(AddCollectionResp {
            collection: collection("Work"),
        });
        assert_eq!(
            CreateOutcome::from_result("Work", created),
            CreateOutcome::Created(collection("Work"))
        );
    }
}
