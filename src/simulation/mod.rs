pub mod states;
pub mod params;
pub mod elements;
pub mod forces;
pub mod integrator;
pub mod scheduler;
pub mod trajectory;
pub mod scenario;
