//! Card encoding integration tests.

use pokerbits::{
    Card, CardError, DECK_SIZE, LEGAL_ENCODINGS, Rank, Suit, is_legal, prime_of, rank_bitmask_of,
    rank_bitmask_of_str, rank_index_of, suit_bitmask_of,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const RANKS: [char; 13] = [
    'A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2',
];
const SUITS: [char; 4] = ['s', 'h', 'd', 'c'];

fn every_card_text() -> impl Iterator<Item = String> {
    SUITS
        .into_iter()
        .flat_map(|suit| RANKS.into_iter().map(move |rank| format!("{rank}{suit}")))
}

#[test]
fn parse_round_trips_every_card() {
    for text in every_card_text() {
        let card = Card::parse(&text).unwrap();
        assert_eq!(card.to_string(), text);
        assert_eq!(
            format!("{}{}", card.rank_symbol(), card.suit_symbol()),
            text
        );
        assert_eq!(text.parse::<Card>().unwrap(), card);
    }
}

#[test]
fn parse_matches_legal_table_order() {
    let parsed: Vec<u32> = every_card_text()
        .map(|text| Card::parse(&text).unwrap().packed())
        .collect();
    assert_eq!(parsed, LEGAL_ENCODINGS);
}

#[test]
fn known_encodings() {
    assert_eq!(Card::parse("As").unwrap().packed(), 268_442_665);
    assert_eq!(Card::parse("Kh").unwrap().packed(), 134_228_773);
    assert_eq!(Card::parse("Ac").unwrap().packed(), 268_471_337);
    assert_eq!(Card::parse("Kc").unwrap().packed(), 134_253_349);
    assert_eq!(Card::parse("2s").unwrap().packed(), 69634);
    assert_eq!(Card::parse("3s").unwrap().packed(), 135_427);
    assert_eq!(Card::parse("2c").unwrap().packed(), 98306);
}

#[test]
fn legal_encodings_are_distinct_and_accepted() {
    let mut sorted = LEGAL_ENCODINGS;
    sorted.sort_unstable();
    assert!(sorted.windows(2).all(|w| w[0] != w[1]));

    for packed in LEGAL_ENCODINGS {
        assert!(is_legal(packed));
        let card = Card::new(packed).unwrap();
        assert_eq!(card.packed(), packed);
        assert_eq!(u32::from(card), packed);
        assert_eq!(Card::try_from(i64::from(packed)).unwrap(), card);
    }
    assert_eq!(Card::all().count(), DECK_SIZE);
    assert!(Card::all().map(Card::packed).eq(LEGAL_ENCODINGS));
}

#[test]
fn construct_rejects_illegal_integers() {
    for packed in [0_i64, 1, 2, 3, -1, i64::from(u32::MAX), 1 << 40] {
        assert_eq!(
            Card::try_from(packed).unwrap_err(),
            CardError::InvalidEncoding(packed)
        );
    }
    assert_eq!(
        Card::new(u32::MAX).unwrap_err(),
        CardError::InvalidEncoding(i64::from(u32::MAX))
    );
}

#[test]
fn construct_rejects_well_shaped_forgeries() {
    let ace_spades = Card::from_parts(Rank::Ace, Suit::Spades).packed();
    let king_spades = Card::from_parts(Rank::King, Suit::Spades).packed();

    // One rank bit, one suit bit, but the prime of a king.
    let wrong_prime = (ace_spades & !0x3F) | u32::from(Rank::King.prime());
    // One rank bit, one suit bit, but the index of a king.
    let wrong_index = (ace_spades & !0xF00) | (u32::from(Rank::King.index()) << 8);
    // Two rank bits.
    let two_ranks = ace_spades | Rank::King.bit();
    // Two suit bits.
    let two_suits = ace_spades | Suit::Hearts.bit();
    // Stray bits in the unused ranges.
    let stray_low = ace_spades | 0x40;
    let stray_high = king_spades | (1 << 31);

    for forged in [
        wrong_prime,
        wrong_index,
        two_ranks,
        two_suits,
        stray_low,
        stray_high,
    ] {
        assert!(!is_legal(forged), "{forged:#x} accepted");
        assert_eq!(
            Card::new(forged).unwrap_err(),
            CardError::InvalidEncoding(i64::from(forged))
        );
    }
}

#[test]
fn fields_are_isolated() {
    for card in Card::all() {
        let rank_mask = card.rank_bitmask();
        let suit_mask = card.suit_bitmask();
        assert_eq!(rank_mask.count_ones(), 1);
        assert!(rank_mask < 1 << 13);
        assert_eq!(suit_mask.count_ones(), 1);
        assert!(suit_mask < 1 << 4);
        assert_eq!(
            (u32::from(rank_mask) << 16) & (u32::from(suit_mask) << 12),
            0
        );
        assert_eq!(card.packed() & 0xE000_00C0, 0);
    }
}

#[test]
fn primes_follow_rank_order() {
    let expected = [
        ('A', 41),
        ('K', 37),
        ('Q', 31),
        ('J', 29),
        ('T', 23),
        ('9', 19),
        ('8', 17),
        ('7', 13),
        ('6', 11),
        ('5', 7),
        ('4', 5),
        ('3', 3),
        ('2', 2),
    ];
    for (rank, prime) in expected {
        for suit in SUITS {
            let card = Card::from_symbols(rank, suit).unwrap();
            assert_eq!(card.prime(), prime);
            assert_eq!(prime_of(card.packed()), prime);
        }
        assert_eq!(Rank::from_symbol(rank).unwrap().prime(), prime);
    }
}

#[test]
fn accessors_agree_with_parts() {
    for (index, rank) in Rank::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(rank.index()), index);
        assert_eq!(Rank::from_index(rank.index()), Some(rank));
        for suit in Suit::ALL {
            let card = Card::from_parts(rank, suit);
            assert_eq!(card.rank(), rank);
            assert_eq!(card.suit(), suit);
            assert_eq!(card.rank_index(), rank.index());
            assert_eq!(card.rank_bitmask(), 1 << rank.index());
            assert_eq!(card.suit_bitmask(), suit.bitmask());
            assert_eq!(Suit::from_bitmask(card.suit_bitmask()), Some(suit));
        }
    }
    assert_eq!(Rank::from_index(13), None);
    assert_eq!(Suit::from_bitmask(3), None);
}

#[test]
fn raw_extraction_matches_card_accessors() {
    for card in Card::all() {
        let packed = card.packed();
        assert_eq!(rank_bitmask_of(packed), card.rank_bitmask());
        assert_eq!(suit_bitmask_of(packed), card.suit_bitmask());
        assert_eq!(rank_index_of(packed), card.rank_index());
        assert_eq!(prime_of(packed), card.prime());
        assert_eq!(
            rank_bitmask_of_str(&card.to_string()).unwrap(),
            card.rank_bitmask()
        );
    }
    assert_eq!(rank_bitmask_of_str("As").unwrap(), 1 << 12);
    assert_eq!(rank_bitmask_of_str("2d").unwrap(), 1);
}

#[test]
fn parse_errors() {
    assert_eq!(
        Card::parse("Xy").unwrap_err(),
        CardError::UnknownSymbol('X')
    );
    assert_eq!(
        Card::parse("Ay").unwrap_err(),
        CardError::UnknownSymbol('y')
    );
    assert_eq!(
        Card::parse("as").unwrap_err(),
        CardError::UnknownSymbol('a')
    );
    assert_eq!(
        Card::parse("AS").unwrap_err(),
        CardError::UnknownSymbol('S')
    );
    assert_eq!(
        Card::parse("A").unwrap_err(),
        CardError::MalformedInput {
            expected: 2,
            found: 1
        }
    );
    assert_eq!(
        Card::parse("").unwrap_err(),
        CardError::MalformedInput {
            expected: 2,
            found: 0
        }
    );
    assert_eq!(
        Card::parse("Ahh").unwrap_err(),
        CardError::MalformedInput {
            expected: 2,
            found: 3
        }
    );
    assert_eq!(
        Card::parse("A♠").unwrap_err(),
        CardError::UnknownSymbol('♠')
    );
    assert_eq!(
        rank_bitmask_of_str("1s").unwrap_err(),
        CardError::UnknownSymbol('1')
    );
}

#[test]
fn ordering_follows_rank_first() {
    let two = Card::parse("2c").unwrap();
    let three = Card::parse("3s").unwrap();
    let ace = Card::parse("As").unwrap();
    assert!(two < three);
    assert!(three < ace);
}

#[test]
fn sampled_cards_round_trip() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..1000 {
        let card: Card = rng.random();
        assert!(is_legal(card.packed()));
        assert_eq!(Card::parse(&card.to_string()).unwrap(), card);
        assert_eq!(Card::new(card.packed()).unwrap(), card);
    }
}

#[test]
fn random_integers_are_rejected_unless_legal() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..10_000 {
        let packed: u32 = rng.random();
        assert_eq!(Card::new(packed).is_ok(), LEGAL_ENCODINGS.contains(&packed));
    }
}

#[test]
fn error_messages() {
    assert_eq!(
        CardError::UnknownSymbol('X').to_string(),
        "unknown rank or suit symbol 'X'"
    );
    assert_eq!(
        CardError::MalformedInput {
            expected: 2,
            found: 1
        }
        .to_string(),
        "expected 2 characters, found 1"
    );
    assert_eq!(
        CardError::InvalidEncoding(3).to_string(),
        "0x3 is not a legal card encoding"
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_packed_value() {
    let card = Card::parse("2s").unwrap();
    assert_eq!(serde_json::to_string(&card).unwrap(), "69634");
    assert_eq!(serde_json::from_str::<Card>("69634").unwrap(), card);
    assert!(serde_json::from_str::<Card>("3").is_err());
}
