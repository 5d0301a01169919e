use std::cmp::Ordering::{self, Equal, Greater, Less};

/// Version / release string pairs and the ordering rpm gives them, including the cases
/// from rpm's own `tests/rpmvercmp.at`.
pub const RPMVERCMP_CASES: &[(&str, Ordering, &str)] = &[
    ("1.0", Equal, "1.0"),
    ("1.0", Less, "2.0"),
    ("2.0", Greater, "1.0"),
    ("2.0.1", Equal, "2.0.1"),
    ("2.0", Less, "2.0.1"),
    ("2.0.1", Greater, "2.0"),
    ("2.0.1a", Equal, "2.0.1a"),
    ("2.0.1a", Greater, "2.0.1"),
    ("2.0.1", Less, "2.0.1a"),
    ("5.5p1", Equal, "5.5p1"),
    ("5.5p1", Less, "5.5p2"),
    ("5.5p2", Greater, "5.5p1"),
    ("5.5p10", Equal, "5.5p10"),
    ("5.5p1", Less, "5.5p10"),
    ("5.5p10", Greater, "5.5p1"),
    ("10xyz", Less, "10.1xyz"),
    ("10.1xyz", Greater, "10xyz"),
    ("xyz10", Equal, "xyz10"),
    ("xyz10", Less, "xyz10.1"),
    ("xyz10.1", Greater, "xyz10"),
    ("xyz.4", Equal, "xyz.4"),
    ("xyz.4", Less, "8"),
    ("8", Greater, "xyz.4"),
    ("xyz.4", Less, "2"),
    ("2", Greater, "xyz.4"),
    ("5.5p2", Less, "5.6p1"),
    ("5.6p1", Greater, "5.5p2"),
    ("5.6p1", Less, "6.5p1"),
    ("6.5p1", Greater, "5.6p1"),
    ("6.0.rc1", Greater, "6.0"),
    ("6.0", Less, "6.0.rc1"),
    ("10b2", Greater, "10a1"),
    ("10a2", Less, "10b2"),
    ("1.0aa", Equal, "1.0aa"),
    ("1.0a", Less, "1.0aa"),
    ("1.0aa", Greater, "1.0a"),
    ("10.0001", Equal, "10.0001"),
    ("10.0001", Equal, "10.1"),
    ("10.1", Equal, "10.0001"),
    ("10.0001", Less, "10.0039"),
    ("10.0039", Greater, "10.0001"),
    ("4.999.9", Less, "5.0"),
    ("5.0", Greater, "4.999.9"),
    ("20101121", Equal, "20101121"),
    ("20101121", Less, "20101122"),
    ("20101122", Greater, "20101121"),
    ("2_0", Equal, "2_0"),
    ("2.0", Equal, "2_0"),
    ("2_0", Equal, "2.0"),
    ("a", Equal, "a"),
    ("a+", Equal, "a+"),
    ("a+", Equal, "a_"),
    ("a_", Equal, "a+"),
    ("+a", Equal, "+a"),
    ("+a", Equal, "_a"),
    ("_a", Equal, "+a"),
    ("+_", Equal, "+_"),
    ("_+", Equal, "+_"),
    ("_+", Equal, "_+"),
    ("+", Equal, "_"),
    ("_", Equal, "+"),
    ("1.0~rc1", Equal, "1.0~rc1"),
    ("1.0~rc1", Less, "1.0"),
    ("1.0", Greater, "1.0~rc1"),
    ("1.0~rc1", Less, "1.0~rc2"),
    ("1.0~rc2", Greater, "1.0~rc1"),
    ("1.0~rc1~git123", Equal, "1.0~rc1~git123"),
    ("1.0~rc1~git123", Less, "1.0~rc1"),
    ("1.0~rc1", Greater, "1.0~rc1~git123"),
];
