mod dump;
mod grabber;

pub use dump::DumpGrabber;
pub use grabber::Grabber;
