//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur d’expression et relayer les touches.
//!
//! Contrats :
//! - Aucune règle d’édition ici : tout passe par `Moteur::appuyer`.
//! - Aucun état “bouton enfoncé” ici : c’est l’affaire de la vue (egui).
//! - Frontière : un symbole hors pavé est refusé avant d’atteindre le moteur.

use tracing::debug;

use crate::noyau::erreur::ErreurTouche;
use crate::noyau::moteur::DIGITS_MAX;
use crate::noyau::{EvaluateurExact, Moteur, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    moteur: Moteur<EvaluateurExact>,
}

impl AppCalc {
    /* ------------------------ Actions “touches” ------------------------ */

    pub fn touche(&mut self, touche: Touche) {
        self.moteur.appuyer(touche);
    }

    /// Symbole brut (clavier physique, etc.) -> touche, ou refus à la frontière.
    pub fn symbole(&mut self, s: &str) -> Result<(), ErreurTouche> {
        let touche = Touche::depuis_symbole(s).inspect_err(|e| {
            debug!(erreur = %e, "symbole ignoré");
        })?;
        self.touche(touche);
        Ok(())
    }

    /// C : remise à "0".
    pub fn clear(&mut self) {
        self.moteur.reinitialiser();
    }

    /* ------------------------ Lecture (rendu) ------------------------ */

    pub fn expression(&self) -> &str {
        self.moteur.expression()
    }

    pub fn apercu(&self) -> Option<&str> {
        self.moteur.apercu()
    }

    pub fn est_en_erreur(&self) -> bool {
        self.moteur.est_en_erreur()
    }

    /* ------------------------ Paramètres ------------------------ */

    pub fn digits(&self) -> usize {
        self.moteur.digits()
    }

    /// Garde-fou : limite digits (évite abus / gel).
    pub fn set_digits(&mut self, digits: usize) {
        self.moteur.set_digits(digits.min(DIGITS_MAX));
    }
}
