// src/noyau/erreur.rs
//
// Erreurs typées du noyau.
// - ErreurEval  : échec de l’évaluateur (jetons, RPN, arithmétique exacte)
// - ErreurTouche : symbole refusé à la frontière du pavé

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseOrpheline,

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("modulo par zéro")]
    ModuloParZero,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurTouche {
    #[error("symbole hors pavé: {0:?}")]
    SymboleInconnu(String),
}
