mod copy_workflow;

pub use copy_workflow::CopyWorkflow;
