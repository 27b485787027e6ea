//! Moteur d’expression : la machine à états du tampon affiché.
//!
//! Chaque touche produit, en une seule étape, la nouvelle expression et son
//! aperçu (`Instantane`). Les règles d’édition gardent le texte évaluable :
//! jamais vide, jamais deux opérateurs binaires de suite, au plus un point
//! par nombre.
//!
//! États : Normal, Erreur (expression == `LITTERAL_ERREUR`).
//! - Normal -> Erreur : seulement "=" qui échoue.
//! - Erreur -> Normal : "C" ou un chiffre (remplacement complet).
//! - Toute autre touche en Erreur : ignorée.
//!
//! L’évaluation elle-même est déléguée à un `Evaluateur`.

use tracing::{debug, info, warn};

use super::eval::{EvaluateurExact, Evaluateur};
use super::format::rationnel_en_decimal;
use super::touche::{est_glyphe_operateur, Touche};

/// Expression canonique “vide”.
pub const EXPRESSION_ZERO: &str = "0";

/// Valeur affichée après un "=" en échec.
pub const LITTERAL_ERREUR: &str = "Error";

/// Précision par défaut (chiffres après la virgule, lecture tronquée).
pub const DIGITS_DEFAUT: usize = 15;

/// Garde-fou : on borne la précision.
pub const DIGITS_MAX: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Etat {
    Normal,
    Erreur,
}

impl Etat {
    pub fn de(expression: &str) -> Etat {
        if expression == LITTERAL_ERREUR {
            Etat::Erreur
        } else {
            Etat::Normal
        }
    }
}

/// Ce que la couche de rendu reçoit après chaque touche.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instantane {
    pub expression: String,     // jamais vide
    pub apercu: Option<String>, // résultat partiel, absent si non évaluable
}

/* ------------------------ Outils texte ------------------------ */

/// `×` -> `*`, `÷` -> `/` (toutes les occurrences).
pub fn normaliser_glyphes(expression: &str) -> String {
    expression.replace('×', "*").replace('÷', "/")
}

fn finit_par_operateur(expression: &str) -> bool {
    expression.chars().last().is_some_and(est_glyphe_operateur)
}

/// Début (octet) du nombre courant.
///
/// Un opérateur est un séparateur binaire seulement s’il suit autre chose
/// qu’un opérateur. Un '-' en tête, ou juste après un opérateur, est un signe :
/// il appartient au nombre ("5+-3" -> "-3").
fn debut_nombre_courant(expression: &str) -> usize {
    let mut debut = 0;
    let mut prec: Option<char> = None;

    for (i, c) in expression.char_indices() {
        if est_glyphe_operateur(c) && prec.is_some_and(|p| !est_glyphe_operateur(p)) {
            debut = i + c.len_utf8();
        }
        prec = Some(c);
    }

    debut
}

/// Nombre courant : la fin de l’expression depuis le dernier séparateur binaire.
pub fn nombre_courant(expression: &str) -> &str {
    &expression[debut_nombre_courant(expression)..]
}

/* ------------------------ Transitions ------------------------ */

/// +/- : bascule le signe du nombre courant; le préfixe reste tel quel.
fn basculer_signe(expression: &str) -> String {
    let debut = debut_nombre_courant(expression);
    let (prefixe, nombre) = expression.split_at(debut);

    if let Some(sans_signe) = nombre.strip_prefix('-') {
        // "-" seul : retirer le signe ne doit pas vider l’expression
        let s = format!("{prefixe}{sans_signe}");
        if s.is_empty() {
            EXPRESSION_ZERO.to_string()
        } else {
            s
        }
    } else if nombre.is_empty() || nombre == EXPRESSION_ZERO {
        expression.to_string()
    } else {
        format!("{prefixe}-{nombre}")
    }
}

fn evaluer_final<E: Evaluateur>(expression: &str, evaluateur: &E, digits: usize) -> String {
    match evaluateur.evaluer(&normaliser_glyphes(expression)) {
        Ok(r) => {
            let texte = rationnel_en_decimal(&r, digits);
            info!(expression, resultat = %texte, "évaluation");
            texte
        }
        Err(e) => {
            warn!(expression, erreur = %e, "évaluation en échec");
            LITTERAL_ERREUR.to_string()
        }
    }
}

/// Nouvelle expression après `touche` (première règle applicable).
pub fn editer<E: Evaluateur>(
    expression: &str,
    touche: Touche,
    evaluateur: &E,
    digits: usize,
) -> String {
    if Etat::de(expression) == Etat::Erreur {
        return match touche {
            Touche::ToutEffacer => EXPRESSION_ZERO.to_string(),
            Touche::Chiffre(_) => editer(EXPRESSION_ZERO, touche, evaluateur, digits),
            _ => expression.to_string(),
        };
    }

    match touche {
        Touche::ToutEffacer => EXPRESSION_ZERO.to_string(),

        Touche::Signe => basculer_signe(expression),

        Touche::Effacer => {
            let mut s = expression.to_string();
            s.pop();
            if s.is_empty() {
                EXPRESSION_ZERO.to_string()
            } else {
                s
            }
        }

        Touche::Egal => evaluer_final(expression, evaluateur, digits),

        Touche::Point => {
            if nombre_courant(expression).contains('.') {
                expression.to_string()
            } else {
                format!("{expression}.")
            }
        }

        Touche::Operateur(op) => {
            if finit_par_operateur(expression) {
                expression.to_string()
            } else {
                format!("{expression}{}", op.glyphe())
            }
        }

        Touche::Chiffre(d) => {
            let Some(c) = char::from_digit(u32::from(d), 10) else {
                return expression.to_string();
            };
            if expression == EXPRESSION_ZERO {
                c.to_string()
            } else {
                format!("{expression}{c}")
            }
        }
    }
}

/// Aperçu (résultat partiel) : None si erreur, opérateur en attente, ou échec.
/// Les échecs sont avalés ici; seul "=" les rend visibles.
pub fn apercu<E: Evaluateur>(expression: &str, evaluateur: &E, digits: usize) -> Option<String> {
    if Etat::de(expression) == Etat::Erreur || finit_par_operateur(expression) {
        return None;
    }

    match evaluateur.evaluer(&normaliser_glyphes(expression)) {
        Ok(r) => Some(rationnel_en_decimal(&r, digits)),
        Err(e) => {
            debug!(expression, erreur = %e, "aperçu indisponible");
            None
        }
    }
}

/// Transition complète : expression + aperçu, en une étape.
pub fn appliquer<E: Evaluateur>(
    expression: &str,
    touche: Touche,
    evaluateur: &E,
    digits: usize,
) -> Instantane {
    let nouvelle = editer(expression, touche, evaluateur, digits);
    debug!(touche = %touche, avant = expression, apres = %nouvelle, "touche");
    let apercu = apercu(&nouvelle, evaluateur, digits);
    Instantane {
        expression: nouvelle,
        apercu,
    }
}

/* ------------------------ Moteur (propriétaire unique) ------------------------ */

#[derive(Clone, Debug)]
pub struct Moteur<E> {
    evaluateur: E,
    digits: usize,
    courant: Instantane,
}

impl Default for Moteur<EvaluateurExact> {
    fn default() -> Self {
        Moteur::new(EvaluateurExact)
    }
}

impl<E: Evaluateur> Moteur<E> {
    pub fn new(evaluateur: E) -> Self {
        Self::avec_digits(evaluateur, DIGITS_DEFAUT)
    }

    pub fn avec_digits(evaluateur: E, digits: usize) -> Self {
        let digits = digits.min(DIGITS_MAX);
        let courant = Instantane {
            expression: EXPRESSION_ZERO.to_string(),
            apercu: apercu(EXPRESSION_ZERO, &evaluateur, digits),
        };
        Self {
            evaluateur,
            digits,
            courant,
        }
    }

    /// Applique une touche; retourne l’état visible qui en résulte.
    pub fn appuyer(&mut self, touche: Touche) -> &Instantane {
        self.courant = appliquer(
            &self.courant.expression,
            touche,
            &self.evaluateur,
            self.digits,
        );
        &self.courant
    }

    pub fn expression(&self) -> &str {
        &self.courant.expression
    }

    pub fn apercu(&self) -> Option<&str> {
        self.courant.apercu.as_deref()
    }

    pub fn etat(&self) -> Etat {
        Etat::de(&self.courant.expression)
    }

    pub fn est_en_erreur(&self) -> bool {
        self.etat() == Etat::Erreur
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Change la précision (bornée) et recalcule l’aperçu.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        self.courant.apercu = apercu(&self.courant.expression, &self.evaluateur, self.digits);
    }

    /// Équivalent de "C".
    pub fn reinitialiser(&mut self) {
        self.appuyer(Touche::ToutEffacer);
    }
}
