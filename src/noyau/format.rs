// src/noyau/format.rs
//
// Rationnel exact -> texte décimal pour l’affichage (expression après "=", aperçu).
// Lecture tronquée (vers zéro) à `digits` chiffres après la virgule,
// zéros finaux retirés : 15/2 -> "7.5", 2/3 -> "0.666…6", 4 -> "4".

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::Signed;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// r -> entier “scalé” = trunc(r * 10^digits)
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    (r.numer() * pow10(digits)) / r.denom()
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// Retire les zéros finaux de la partie décimale (et le point s’il reste seul).
fn sans_zeros_finaux(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

/// Texte décimal affichable d’un rationnel.
///
/// Le signe vient de la valeur tronquée : une valeur négative plus petite
/// que 10^-digits s’affiche "0", jamais "-0".
pub fn rationnel_en_decimal(r: &BigRational, digits: usize) -> String {
    let scaled = rational_scaled(r, digits);
    if scaled.sign() == Sign::NoSign {
        return "0".to_string();
    }
    sans_zeros_finaux(scaled_to_decimal(scaled, digits))
}

#[cfg(test)]
mod tests {
    use super::rationnel_en_decimal;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn entiers_et_decimaux_finis() {
        assert_eq!(rationnel_en_decimal(&q(15, 1), 15), "15");
        assert_eq!(rationnel_en_decimal(&q(15, 2), 15), "7.5");
        assert_eq!(rationnel_en_decimal(&q(-1, 8), 15), "-0.125");
        assert_eq!(rationnel_en_decimal(&q(0, 1), 15), "0");
    }

    #[test]
    fn periodique_tronque() {
        assert_eq!(rationnel_en_decimal(&q(2, 3), 5), "0.66666");
        assert_eq!(rationnel_en_decimal(&q(-2, 3), 5), "-0.66666");
        assert_eq!(rationnel_en_decimal(&q(1, 3), 0), "0");
        assert_eq!(rationnel_en_decimal(&q(7, 2), 0), "3");
    }

    #[test]
    fn jamais_moins_zero() {
        assert_eq!(rationnel_en_decimal(&q(-1, 1_000_000), 3), "0");
    }

    #[test]
    fn grands_entiers_sans_perte() {
        let r = BigRational::from_integer(BigInt::from(10).pow(30));
        assert_eq!(
            rationnel_en_decimal(&r, 15),
            "1000000000000000000000000000000"
        );
    }
}
