mod style_dispatcher;

pub use style_dispatcher::StyleDispatcher;
