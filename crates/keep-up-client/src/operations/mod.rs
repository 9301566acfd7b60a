/// The viewer's profile (`{ viewer { name email } }`)
pub mod viewer;

/// The viewer's tasks (`{ viewer { tasks { id title description } } }`)
pub mod tasks;
