//! Noyau — évaluateur (boîte noire vue du moteur)
//!
//! tokenize -> RPN -> Expr -> valeur exacte (BigRational)
//!
//! Le moteur ne connaît que le trait `Evaluateur`; `EvaluateurExact` est
//! l’implémentation livrée. Syntaxe attendue : glyphes déjà normalisés
//! (`*` et `/`, pas `×` ni `÷`).

use num_rational::BigRational;
use tracing::trace;

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{from_rpn, to_rpn};

/// Contrat de l’évaluateur externe : synchrone, sans effet de bord.
pub trait Evaluateur {
    fn evaluer(&self, texte: &str) -> Result<BigRational, ErreurEval>;
}

/// Évaluateur exact (rationnels, aucun flottant).
#[derive(Clone, Copy, Debug, Default)]
pub struct EvaluateurExact;

impl Evaluateur for EvaluateurExact {
    fn evaluer(&self, texte: &str) -> Result<BigRational, ErreurEval> {
        let s = texte.trim();
        if s.is_empty() {
            return Err(ErreurEval::EntreeVide);
        }

        // 1) Jetons
        let jetons = tokenize(s)?;

        // 2) RPN
        let rpn = to_rpn(&jetons)?;
        trace!(jetons = %format_tokens(&jetons), rpn = %format_tokens(&rpn), "pipeline");

        // 3) AST puis valeur
        from_rpn(&rpn)?.evaluer()
    }
}
