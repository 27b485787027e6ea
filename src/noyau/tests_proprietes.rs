//! Propriétés (proptest) sur des suites de touches arbitraires.

use proptest::prelude::*;

use super::eval::EvaluateurExact;
use super::moteur::{editer, Moteur, DIGITS_DEFAUT, LITTERAL_ERREUR};
use super::touche::{est_glyphe_operateur, Operateur, Touche};

// ===== Stratégies =====

fn operateur_strategy() -> impl Strategy<Value = Operateur> {
    prop_oneof![
        Just(Operateur::Plus),
        Just(Operateur::Moins),
        Just(Operateur::Fois),
        Just(Operateur::Divise),
        Just(Operateur::Pourcent),
    ]
}

fn touche_strategy() -> impl Strategy<Value = Touche> {
    prop_oneof![
        4 => (0u8..=9u8).prop_map(Touche::Chiffre),
        2 => operateur_strategy().prop_map(Touche::Operateur),
        1 => Just(Touche::Point),
        1 => Just(Touche::Signe),
        1 => Just(Touche::Effacer),
        1 => Just(Touche::ToutEffacer),
        1 => Just(Touche::Egal),
    ]
}

/// Expression atteignable : celle que produit une suite de touches.
fn atteignable_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(touche_strategy(), 0..40).prop_map(|touches| {
        let mut m = Moteur::default();
        for t in touches {
            m.appuyer(t);
        }
        m.expression().to_string()
    })
}

fn ap(expr: &str, touche: Touche) -> String {
    editer(expr, touche, &EvaluateurExact, DIGITS_DEFAUT)
}

proptest! {
    /// L’expression n’est jamais vide, et l’aperçu est absent sur opérateur en attente.
    #[test]
    fn prop_jamais_vide_apercu_coherent(touches in prop::collection::vec(touche_strategy(), 0..60)) {
        let mut m = Moteur::default();
        for t in touches {
            let i = m.appuyer(t);
            prop_assert!(!i.expression.is_empty());
            if i.expression.chars().last().is_some_and(est_glyphe_operateur) {
                prop_assert!(i.apercu.is_none());
            }
        }
    }

    /// Un opérateur après un opérateur ne change rien.
    #[test]
    fn prop_double_operateur_noop(expr in atteignable_strategy(), a in operateur_strategy(), b in operateur_strategy()) {
        let apres_a = ap(&expr, Touche::Operateur(a));
        prop_assume!(apres_a.chars().last().is_some_and(est_glyphe_operateur));
        prop_assert_eq!(ap(&apres_a, Touche::Operateur(b)), apres_a);
    }

    /// Un second point dans le même nombre est refusé.
    #[test]
    fn prop_point_idempotent(expr in atteignable_strategy()) {
        let une_fois = ap(&expr, Touche::Point);
        prop_assert_eq!(ap(&une_fois, Touche::Point), une_fois);
    }

    /// +/- deux fois redonne l’entier de départ.
    #[test]
    fn prop_signe_involutif(n in 1u32..1_000_000u32) {
        let s = n.to_string();
        prop_assert_eq!(ap(&ap(&s, Touche::Signe), Touche::Signe), s);
    }

    /// "C" ramène toujours à "0".
    #[test]
    fn prop_c_toujours_zero(expr in atteignable_strategy()) {
        prop_assert_eq!(ap(&expr, Touche::ToutEffacer), "0");
    }

    /// En Erreur, seuls "C" et les chiffres font quelque chose.
    #[test]
    fn prop_erreur_bloque_le_reste(t in touche_strategy()) {
        let r = ap(LITTERAL_ERREUR, t);
        match t {
            Touche::ToutEffacer => prop_assert_eq!(r, "0"),
            Touche::Chiffre(d) => prop_assert_eq!(r, d.to_string()),
            _ => prop_assert_eq!(r, LITTERAL_ERREUR),
        }
    }
}
