mod node;
mod stepper;
mod view;

pub use stepper::RoadmapStepper;
pub use view::RoadmapView;
