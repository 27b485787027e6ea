//! Noyau : moteur d’expression + évaluateur exact
//!
//! Organisation interne :
//! - touche.rs   : ensemble fermé des touches du pavé (+ frontière symbole -> Touche)
//! - moteur.rs   : machine à états du tampon (édition + aperçu)
//! - erreur.rs   : erreurs typées (évaluateur, frontière)
//! - jetons.rs   : tokenisation (décimaux exacts)
//! - rpn.rs      : shunting-yard + construction Expr
//! - expr.rs     : AST exact + évaluation
//! - format.rs   : rationnel -> texte décimal
//! - eval.rs     : trait Evaluateur + pipeline exact

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod rpn;
pub mod touche;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use eval::EvaluateurExact;
pub use moteur::Moteur;
pub use touche::{Operateur, Touche};
