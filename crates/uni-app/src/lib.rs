/// Command-line front end for unistyle.
///
/// Lecture du texte, rendu de la galerie, batch parallèle et mode watch.

pub mod batch;
pub mod cli;
pub mod render;
pub mod watch;
