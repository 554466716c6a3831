// Resume match workflow: form inputs, the submission gate, the request
// lifecycle and the result view. Scoring itself happens on the remote service.

pub mod input;
pub mod orchestrator;
pub mod page;
pub mod presenter;
pub mod validation;
