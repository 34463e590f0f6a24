// Adapters layer: concrete clients for the external collaborators (video
// platform, hosted sentiment model).

pub mod inference;
pub mod youtube;

pub use inference::HostedSentimentModel;
pub use youtube::YouTubeClient;
