pub(crate) mod modal;
pub(crate) mod toast;

pub(crate) use modal::Modal;
