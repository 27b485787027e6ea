//! Touches du pavé (ensemble fermé).
//!
//! Le pavé émet des `Touche`; tout symbole hors de cet ensemble est refusé
//! ici, à la frontière, et n’atteint jamais le moteur.

use std::fmt;

use super::erreur::ErreurTouche;

/// Opérateurs binaires, avec leur glyphe d’affichage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Pourcent,
}

impl Operateur {
    pub const TOUS: [Operateur; 5] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Pourcent,
    ];

    /// Glyphe tel qu’il apparaît dans l’expression affichée.
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
            Operateur::Pourcent => '%',
        }
    }

    pub fn depuis_glyphe(c: char) -> Option<Operateur> {
        Operateur::TOUS.into_iter().find(|op| op.glyphe() == c)
    }
}

/// Vrai si `c` est un glyphe d’opérateur (+ - × ÷ %).
pub fn est_glyphe_operateur(c: char) -> bool {
    Operateur::depuis_glyphe(c).is_some()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    Chiffre(u8), // 0..=9
    Operateur(Operateur),
    Point,
    Signe,       // +/-
    Effacer,     // del
    ToutEffacer, // C
    Egal,
}

impl Touche {
    /// Parse un symbole du pavé.
    ///
    /// Alias ASCII acceptés : `*` pour `×`, `/` pour `÷` (clavier physique).
    pub fn depuis_symbole(s: &str) -> Result<Touche, ErreurTouche> {
        let t = match s {
            "C" => Touche::ToutEffacer,
            "del" => Touche::Effacer,
            "+/-" => Touche::Signe,
            "." => Touche::Point,
            "=" => Touche::Egal,
            "*" => Touche::Operateur(Operateur::Fois),
            "/" => Touche::Operateur(Operateur::Divise),
            _ => {
                let mut it = s.chars();
                match (it.next(), it.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Touche::Chiffre(c as u8 - b'0'),
                    (Some(c), None) => match Operateur::depuis_glyphe(c) {
                        Some(op) => Touche::Operateur(op),
                        None => return Err(ErreurTouche::SymboleInconnu(s.to_string())),
                    },
                    _ => return Err(ErreurTouche::SymboleInconnu(s.to_string())),
                }
            }
        };
        Ok(t)
    }

    /// Étiquette affichée sur le bouton.
    pub fn symbole(self) -> String {
        match self {
            Touche::Chiffre(d) => d.to_string(),
            Touche::Operateur(op) => op.glyphe().to_string(),
            Touche::Point => ".".into(),
            Touche::Signe => "+/-".into(),
            Touche::Effacer => "del".into(),
            Touche::ToutEffacer => "C".into(),
            Touche::Egal => "=".into(),
        }
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbole())
    }
}
