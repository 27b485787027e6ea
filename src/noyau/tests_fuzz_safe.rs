//! Tests fuzz safe : suites de touches aléatoires, invariants du moteur.
//!
//! But : marteler le moteur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de suite bornée
//! - budget temps global
//! - invariants vérifiés après CHAQUE touche

use std::time::{Duration, Instant};

use super::moteur::{Etat, Instantane, Moteur, LITTERAL_ERREUR};
use super::touche::{est_glyphe_operateur, Operateur, Touche};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

fn gen_touche(rng: &mut Rng) -> Touche {
    // chiffres surreprésentés, sinon "=" / "C" videraient tout trop vite
    match rng.pick(20) {
        0..=8 => Touche::Chiffre(rng.pick(10) as u8),
        9..=12 => Touche::Operateur(Operateur::TOUS[rng.pick(5) as usize]),
        13 => Touche::Point,
        14 | 15 => Touche::Signe,
        16 => Touche::Effacer,
        17 | 18 => Touche::Egal,
        _ => Touche::ToutEffacer,
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants(avant: &str, touche: Touche, i: &Instantane) {
    let e = &i.expression;
    let ctx = format!("avant={avant:?} touche={touche} apres={e:?}");

    assert!(!e.is_empty(), "expression vide: {ctx}");

    if e.chars().last().is_some_and(est_glyphe_operateur) {
        assert!(i.apercu.is_none(), "aperçu sur opérateur en attente: {ctx}");
    }

    if Etat::de(e) == Etat::Erreur {
        assert!(i.apercu.is_none(), "aperçu en état Erreur: {ctx}");
        // on n’entre en Erreur que par "=" (ou on y reste)
        assert!(
            touche == Touche::Egal || avant == LITTERAL_ERREUR,
            "Erreur atteinte hors '=': {ctx}"
        );
    } else {
        // au plus un point par nombre
        for morceau in e.split(est_glyphe_operateur) {
            assert!(morceau.matches('.').count() <= 1, "double point: {ctx}");
        }
    }

    // pas de zéro de tête conservé quand tout est "0"
    if avant == "0" {
        if let Touche::Chiffre(d) = touche {
            assert_eq!(e, &d.to_string(), "{ctx}");
        }
    }
}

fn derouler(seed: u64, n: usize, start: Instant, max: Duration) -> Vec<String> {
    let mut rng = Rng::new(seed);
    let mut m = Moteur::default();
    let mut trace = Vec::with_capacity(n);

    for _ in 0..n {
        budget(start, max);

        let avant = m.expression().to_string();
        let touche = gen_touche(&mut rng);
        let i = m.appuyer(touche).clone();
        check_invariants(&avant, touche, &i);
        trace.push(i.expression);
    }

    trace
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_par_touche() {
    let t0 = Instant::now();
    let max = Duration::from_millis(5000);

    for seed in 0..20u64 {
        derouler(0xC0FFEE_u64 ^ seed, 200, t0, max);
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(5000);

    // Même seed => mêmes touches => mêmes expressions
    let a = derouler(42, 400, t0, max);
    let b = derouler(42, 400, t0, max);
    assert_eq!(a, b);
}

#[test]
fn fuzz_safe_erreur_atteinte_et_quittee() {
    // Le fuzz doit réellement traverser l’état Erreur, sinon il ne “balaye” rien.
    let t0 = Instant::now();
    let max = Duration::from_millis(5000);

    let mut vu_erreur = false;
    let mut vu_sortie = false;
    for seed in 0..20u64 {
        let trace = derouler(0xBADC0DE_u64 ^ seed, 200, t0, max);
        for w in trace.windows(2) {
            if w[1] == LITTERAL_ERREUR {
                vu_erreur = true;
            }
            if w[0] == LITTERAL_ERREUR && w[1] != LITTERAL_ERREUR {
                vu_sortie = true;
            }
        }
    }
    assert!(vu_erreur, "aucune Erreur vue");
    assert!(vu_sortie, "aucune sortie d’Erreur vue");
}
