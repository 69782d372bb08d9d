//! GAN model records: the base pair and its InfoGAN and ACGAN extensions.

mod ac_gan;
mod gan_model;
mod info_gan;

#[cfg(test)]
mod tests;

pub use ac_gan::AcGanModel;
pub use gan_model::GanModel;
pub use info_gan::InfoGanModel;
