//! Named character references, sorted by name for binary search.
//!
//! Names ending in `;` require the terminator. The handful of legacy names
//! listed without it may also appear unterminated in running text.

pub(crate) static ENTITIES: [(&str, char, Option<char>); 2231] = [
    ("AElig", '\u{C6}', None),
    ("AElig;", '\u{C6}', None),
    ("AMP", '\u{26}', None),
    ("AMP;", '\u{26}', None),
    ("Aacute", '\u{C1}', None),
    ("Aacute;", '\u{C1}', None),
    ("Abreve;", '\u{102}', None),
    ("Acirc", '\u{C2}', None),
    ("Acirc;", '\u{C2}', None),
    ("Acy;", '\u{410}', None),
    ("Afr;", '\u{1D504}', None),
    ("Agrave", '\u{C0}', None),
    ("Agrave;", '\u{C0}', None),
    ("Alpha;", '\u{391}', None),
    ("Amacr;", '\u{100}', None),
    ("And;", '\u{2A53}', None),
    ("Aogon;", '\u{104}', None),
    ("Aopf;", '\u{1D538}', None),
    ("ApplyFunction;", '\u{2061}', None),
    ("Aring", '\u{C5}', None),
    ("Aring;", '\u{C5}', None),
    ("Ascr;", '\u{1D49C}', None),
    ("Assign;", '\u{2254}', None),
    ("Atilde", '\u{C3}', None),
    ("Atilde;", '\u{C3}', None),
    ("Auml", '\u{C4}', None),
    ("Auml;", '\u{C4}', None),
    ("Backslash;", '\u{2216}', None),
    ("Barv;", '\u{2AE7}', None),
    ("Barwed;", '\u{2306}', None),
    ("Bcy;", '\u{411}', None),
    ("Because;", '\u{2235}', None),
    ("Bernoullis;", '\u{212C}', None),
    ("Beta;", '\u{392}', None),
    ("Bfr;", '\u{1D505}', None),
    ("Bopf;", '\u{1D539}', None),
    ("Breve;", '\u{2D8}', None),
    ("Bscr;", '\u{212C}', None),
    ("Bumpeq;", '\u{224E}', None),
    ("CHcy;", '\u{427}', None),
    ("COPY", '\u{A9}', None),
    ("COPY;", '\u{A9}', None),
    ("Cacute;", '\u{106}', None),
    ("Cap;", '\u{22D2}', None),
    ("CapitalDifferentialD;", '\u{2145}', None),
    ("Cayleys;", '\u{212D}', None),
    ("Ccaron;", '\u{10C}', None),
    ("Ccedil", '\u{C7}', None),
    ("Ccedil;", '\u{C7}', None),
    ("Ccirc;", '\u{108}', None),
    ("Cconint;", '\u{2230}', None),
    ("Cdot;", '\u{10A}', None),
    ("Cedilla;", '\u{B8}', None),
    ("CenterDot;", '\u{B7}', None),
    ("Cfr;", '\u{212D}', None),
    ("Chi;", '\u{3A7}', None),
    ("CircleDot;", '\u{2299}', None),
    ("CircleMinus;", '\u{2296}', None),
    ("CirclePlus;", '\u{2295}', None),
    ("CircleTimes;", '\u{2297}', None),
    ("ClockwiseContourIntegral;", '\u{2232}', None),
    ("CloseCurlyDoubleQuote;", '\u{201D}', None),
    ("CloseCurlyQuote;", '\u{2019}', None),
    ("Colon;", '\u{2237}', None),
    ("Colone;", '\u{2A74}', None),
    ("Congruent;", '\u{2261}', None),
    ("Conint;", '\u{222F}', None),
    ("ContourIntegral;", '\u{222E}', None),
    ("Copf;", '\u{2102}', None),
    ("Coproduct;", '\u{2210}', None),
    ("CounterClockwiseContourIntegral;", '\u{2233}', None),
    ("Cross;", '\u{2A2F}', None),
    ("Cscr;", '\u{1D49E}', None),
    ("Cup;", '\u{22D3}', None),
    ("CupCap;", '\u{224D}', None),
    ("DD;", '\u{2145}', None),
    ("DDotrahd;", '\u{2911}', None),
    ("DJcy;", '\u{402}', None),
    ("DScy;", '\u{405}', None),
    ("DZcy;", '\u{40F}', None),
    ("Dagger;", '\u{2021}', None),
    ("Darr;", '\u{21A1}', None),
    ("Dashv;", '\u{2AE4}', None),
    ("Dcaron;", '\u{10E}', None),
    ("Dcy;", '\u{414}', None),
    ("Del;", '\u{2207}', None),
    ("Delta;", '\u{394}', None),
    ("Dfr;", '\u{1D507}', None),
    ("DiacriticalAcute;", '\u{B4}', None),
    ("DiacriticalDot;", '\u{2D9}', None),
    ("DiacriticalDoubleAcute;", '\u{2DD}', None),
    ("DiacriticalGrave;", '\u{60}', None),
    ("DiacriticalTilde;", '\u{2DC}', None),
    ("Diamond;", '\u{22C4}', None),
    ("DifferentialD;", '\u{2146}', None),
    ("Dopf;", '\u{1D53B}', None),
    ("Dot;", '\u{A8}', None),
    ("DotDot;", '\u{20DC}', None),
    ("DotEqual;", '\u{2250}', None),
    ("DoubleContourIntegral;", '\u{222F}', None),
    ("DoubleDot;", '\u{A8}', None),
    ("DoubleDownArrow;", '\u{21D3}', None),
    ("DoubleLeftArrow;", '\u{21D0}', None),
    ("DoubleLeftRightArrow;", '\u{21D4}', None),
    ("DoubleLeftTee;", '\u{2AE4}', None),
    ("DoubleLongLeftArrow;", '\u{27F8}', None),
    ("DoubleLongLeftRightArrow;", '\u{27FA}', None),
    ("DoubleLongRightArrow;", '\u{27F9}', None),
    ("DoubleRightArrow;", '\u{21D2}', None),
    ("DoubleRightTee;", '\u{22A8}', None),
    ("DoubleUpArrow;", '\u{21D1}', None),
    ("DoubleUpDownArrow;", '\u{21D5}', None),
    ("DoubleVerticalBar;", '\u{2225}', None),
    ("DownArrow;", '\u{2193}', None),
    ("DownArrowBar;", '\u{2913}', None),
    ("DownArrowUpArrow;", '\u{21F5}', None),
    ("DownBreve;", '\u{311}', None),
    ("DownLeftRightVector;", '\u{2950}', None),
    ("DownLeftTeeVector;", '\u{295E}', None),
    ("DownLeftVector;", '\u{21BD}', None),
    ("DownLeftVectorBar;", '\u{2956}', None),
    ("DownRightTeeVector;", '\u{295F}', None),
    ("DownRightVector;", '\u{21C1}', None),
    ("DownRightVectorBar;", '\u{2957}', None),
    ("DownTee;", '\u{22A4}', None),
    ("DownTeeArrow;", '\u{21A7}', None),
    ("Downarrow;", '\u{21D3}', None),
    ("Dscr;", '\u{1D49F}', None),
    ("Dstrok;", '\u{110}', None),
    ("ENG;", '\u{14A}', None),
    ("ETH", '\u{D0}', None),
    ("ETH;", '\u{D0}', None),
    ("Eacute", '\u{C9}', None),
    ("Eacute;", '\u{C9}', None),
    ("Ecaron;", '\u{11A}', None),
    ("Ecirc", '\u{CA}', None),
    ("Ecirc;", '\u{CA}', None),
    ("Ecy;", '\u{42D}', None),
    ("Edot;", '\u{116}', None),
    ("Efr;", '\u{1D508}', None),
    ("Egrave", '\u{C8}', None),
    ("Egrave;", '\u{C8}', None),
    ("Element;", '\u{2208}', None),
    ("Emacr;", '\u{112}', None),
    ("EmptySmallSquare;", '\u{25FB}', None),
    ("EmptyVerySmallSquare;", '\u{25AB}', None),
    ("Eogon;", '\u{118}', None),
    ("Eopf;", '\u{1D53C}', None),
    ("Epsilon;", '\u{395}', None),
    ("Equal;", '\u{2A75}', None),
    ("EqualTilde;", '\u{2242}', None),
    ("Equilibrium;", '\u{21CC}', None),
    ("Escr;", '\u{2130}', None),
    ("Esim;", '\u{2A73}', None),
    ("Eta;", '\u{397}', None),
    ("Euml", '\u{CB}', None),
    ("Euml;", '\u{CB}', None),
    ("Exists;", '\u{2203}', None),
    ("ExponentialE;", '\u{2147}', None),
    ("Fcy;", '\u{424}', None),
    ("Ffr;", '\u{1D509}', None),
    ("FilledSmallSquare;", '\u{25FC}', None),
    ("FilledVerySmallSquare;", '\u{25AA}', None),
    ("Fopf;", '\u{1D53D}', None),
    ("ForAll;", '\u{2200}', None),
    ("Fouriertrf;", '\u{2131}', None),
    ("Fscr;", '\u{2131}', None),
    ("GJcy;", '\u{403}', None),
    ("GT", '\u{3E}', None),
    ("GT;", '\u{3E}', None),
    ("Gamma;", '\u{393}', None),
    ("Gammad;", '\u{3DC}', None),
    ("Gbreve;", '\u{11E}', None),
    ("Gcedil;", '\u{122}', None),
    ("Gcirc;", '\u{11C}', None),
    ("Gcy;", '\u{413}', None),
    ("Gdot;", '\u{120}', None),
    ("Gfr;", '\u{1D50A}', None),
    ("Gg;", '\u{22D9}', None),
    ("Gopf;", '\u{1D53E}', None),
    ("GreaterEqual;", '\u{2265}', None),
    ("GreaterEqualLess;", '\u{22DB}', None),
    ("GreaterFullEqual;", '\u{2267}', None),
    ("GreaterGreater;", '\u{2AA2}', None),
    ("GreaterLess;", '\u{2277}', None),
    ("GreaterSlantEqual;", '\u{2A7E}', None),
    ("GreaterTilde;", '\u{2273}', None),
    ("Gscr;", '\u{1D4A2}', None),
    ("Gt;", '\u{226B}', None),
    ("HARDcy;", '\u{42A}', None),
    ("Hacek;", '\u{2C7}', None),
    ("Hat;", '\u{5E}', None),
    ("Hcirc;", '\u{124}', None),
    ("Hfr;", '\u{210C}', None),
    ("HilbertSpace;", '\u{210B}', None),
    ("Hopf;", '\u{210D}', None),
    ("HorizontalLine;", '\u{2500}', None),
    ("Hscr;", '\u{210B}', None),
    ("Hstrok;", '\u{126}', None),
    ("HumpDownHump;", '\u{224E}', None),
    ("HumpEqual;", '\u{224F}', None),
    ("IEcy;", '\u{415}', None),
    ("IJlig;", '\u{132}', None),
    ("IOcy;", '\u{401}', None),
    ("Iacute", '\u{CD}', None),
    ("Iacute;", '\u{CD}', None),
    ("Icirc", '\u{CE}', None),
    ("Icirc;", '\u{CE}', None),
    ("Icy;", '\u{418}', None),
    ("Idot;", '\u{130}', None),
    ("Ifr;", '\u{2111}', None),
    ("Igrave", '\u{CC}', None),
    ("Igrave;", '\u{CC}', None),
    ("Im;", '\u{2111}', None),
    ("Imacr;", '\u{12A}', None),
    ("ImaginaryI;", '\u{2148}', None),
    ("Implies;", '\u{21D2}', None),
    ("Int;", '\u{222C}', None),
    ("Integral;", '\u{222B}', None),
    ("Intersection;", '\u{22C2}', None),
    ("InvisibleComma;", '\u{2063}', None),
    ("InvisibleTimes;", '\u{2062}', None),
    ("Iogon;", '\u{12E}', None),
    ("Iopf;", '\u{1D540}', None),
    ("Iota;", '\u{399}', None),
    ("Iscr;", '\u{2110}', None),
    ("Itilde;", '\u{128}', None),
    ("Iukcy;", '\u{406}', None),
    ("Iuml", '\u{CF}', None),
    ("Iuml;", '\u{CF}', None),
    ("Jcirc;", '\u{134}', None),
    ("Jcy;", '\u{419}', None),
    ("Jfr;", '\u{1D50D}', None),
    ("Jopf;", '\u{1D541}', None),
    ("Jscr;", '\u{1D4A5}', None),
    ("Jsercy;", '\u{408}', None),
    ("Jukcy;", '\u{404}', None),
    ("KHcy;", '\u{425}', None),
    ("KJcy;", '\u{40C}', None),
    ("Kappa;", '\u{39A}', None),
    ("Kcedil;", '\u{136}', None),
    ("Kcy;", '\u{41A}', None),
    ("Kfr;", '\u{1D50E}', None),
    ("Kopf;", '\u{1D542}', None),
    ("Kscr;", '\u{1D4A6}', None),
    ("LJcy;", '\u{409}', None),
    ("LT", '\u{3C}', None),
    ("LT;", '\u{3C}', None),
    ("Lacute;", '\u{139}', None),
    ("Lambda;", '\u{39B}', None),
    ("Lang;", '\u{27EA}', None),
    ("Laplacetrf;", '\u{2112}', None),
    ("Larr;", '\u{219E}', None),
    ("Lcaron;", '\u{13D}', None),
    ("Lcedil;", '\u{13B}', None),
    ("Lcy;", '\u{41B}', None),
    ("LeftAngleBracket;", '\u{27E8}', None),
    ("LeftArrow;", '\u{2190}', None),
    ("LeftArrowBar;", '\u{21E4}', None),
    ("LeftArrowRightArrow;", '\u{21C6}', None),
    ("LeftCeiling;", '\u{2308}', None),
    ("LeftDoubleBracket;", '\u{27E6}', None),
    ("LeftDownTeeVector;", '\u{2961}', None),
    ("LeftDownVector;", '\u{21C3}', None),
    ("LeftDownVectorBar;", '\u{2959}', None),
    ("LeftFloor;", '\u{230A}', None),
    ("LeftRightArrow;", '\u{2194}', None),
    ("LeftRightVector;", '\u{294E}', None),
    ("LeftTee;", '\u{22A3}', None),
    ("LeftTeeArrow;", '\u{21A4}', None),
    ("LeftTeeVector;", '\u{295A}', None),
    ("LeftTriangle;", '\u{22B2}', None),
    ("LeftTriangleBar;", '\u{29CF}', None),
    ("LeftTriangleEqual;", '\u{22B4}', None),
    ("LeftUpDownVector;", '\u{2951}', None),
    ("LeftUpTeeVector;", '\u{2960}', None),
    ("LeftUpVector;", '\u{21BF}', None),
    ("LeftUpVectorBar;", '\u{2958}', None),
    ("LeftVector;", '\u{21BC}', None),
    ("LeftVectorBar;", '\u{2952}', None),
    ("Leftarrow;", '\u{21D0}', None),
    ("Leftrightarrow;", '\u{21D4}', None),
    ("LessEqualGreater;", '\u{22DA}', None),
    ("LessFullEqual;", '\u{2266}', None),
    ("LessGreater;", '\u{2276}', None),
    ("LessLess;", '\u{2AA1}', None),
    ("LessSlantEqual;", '\u{2A7D}', None),
    ("LessTilde;", '\u{2272}', None),
    ("Lfr;", '\u{1D50F}', None),
    ("Ll;", '\u{22D8}', None),
    ("Lleftarrow;", '\u{21DA}', None),
    ("Lmidot;", '\u{13F}', None),
    ("LongLeftArrow;", '\u{27F5}', None),
    ("LongLeftRightArrow;", '\u{27F7}', None),
    ("LongRightArrow;", '\u{27F6}', None),
    ("Longleftarrow;", '\u{27F8}', None),
    ("Longleftrightarrow;", '\u{27FA}', None),
    ("Longrightarrow;", '\u{27F9}', None),
    ("Lopf;", '\u{1D543}', None),
    ("LowerLeftArrow;", '\u{2199}', None),
    ("LowerRightArrow;", '\u{2198}', None),
    ("Lscr;", '\u{2112}', None),
    ("Lsh;", '\u{21B0}', None),
    ("Lstrok;", '\u{141}', None),
    ("Lt;", '\u{226A}', None),
    ("Map;", '\u{2905}', None),
    ("Mcy;", '\u{41C}', None),
    ("MediumSpace;", '\u{205F}', None),
    ("Mellintrf;", '\u{2133}', None),
    ("Mfr;", '\u{1D510}', None),
    ("MinusPlus;", '\u{2213}', None),
    ("Mopf;", '\u{1D544}', None),
    ("Mscr;", '\u{2133}', None),
    ("Mu;", '\u{39C}', None),
    ("NJcy;", '\u{40A}', None),
    ("Nacute;", '\u{143}', None),
    ("Ncaron;", '\u{147}', None),
    ("Ncedil;", '\u{145}', None),
    ("Ncy;", '\u{41D}', None),
    ("NegativeMediumSpace;", '\u{200B}', None),
    ("NegativeThickSpace;", '\u{200B}', None),
    ("NegativeThinSpace;", '\u{200B}', None),
    ("NegativeVeryThinSpace;", '\u{200B}', None),
    ("NestedGreaterGreater;", '\u{226B}', None),
    ("NestedLessLess;", '\u{226A}', None),
    ("NewLine;", '\u{A}', None),
    ("Nfr;", '\u{1D511}', None),
    ("NoBreak;", '\u{2060}', None),
    ("NonBreakingSpace;", '\u{A0}', None),
    ("Nopf;", '\u{2115}', None),
    ("Not;", '\u{2AEC}', None),
    ("NotCongruent;", '\u{2262}', None),
    ("NotCupCap;", '\u{226D}', None),
    ("NotDoubleVerticalBar;", '\u{2226}', None),
    ("NotElement;", '\u{2209}', None),
    ("NotEqual;", '\u{2260}', None),
    ("NotEqualTilde;", '\u{2242}', Some('\u{338}')),
    ("NotExists;", '\u{2204}', None),
    ("NotGreater;", '\u{226F}', None),
    ("NotGreaterEqual;", '\u{2271}', None),
    ("NotGreaterFullEqual;", '\u{2267}', Some('\u{338}')),
    ("NotGreaterGreater;", '\u{226B}', Some('\u{338}')),
    ("NotGreaterLess;", '\u{2279}', None),
    ("NotGreaterSlantEqual;", '\u{2A7E}', Some('\u{338}')),
    ("NotGreaterTilde;", '\u{2275}', None),
    ("NotHumpDownHump;", '\u{224E}', Some('\u{338}')),
    ("NotHumpEqual;", '\u{224F}', Some('\u{338}')),
    ("NotLeftTriangle;", '\u{22EA}', None),
    ("NotLeftTriangleBar;", '\u{29CF}', Some('\u{338}')),
    ("NotLeftTriangleEqual;", '\u{22EC}', None),
    ("NotLess;", '\u{226E}', None),
    ("NotLessEqual;", '\u{2270}', None),
    ("NotLessGreater;", '\u{2278}', None),
    ("NotLessLess;", '\u{226A}', Some('\u{338}')),
    ("NotLessSlantEqual;", '\u{2A7D}', Some('\u{338}')),
    ("NotLessTilde;", '\u{2274}', None),
    ("NotNestedGreaterGreater;", '\u{2AA2}', Some('\u{338}')),
    ("NotNestedLessLess;", '\u{2AA1}', Some('\u{338}')),
    ("NotPrecedes;", '\u{2280}', None),
    ("NotPrecedesEqual;", '\u{2AAF}', Some('\u{338}')),
    ("NotPrecedesSlantEqual;", '\u{22E0}', None),
    ("NotReverseElement;", '\u{220C}', None),
    ("NotRightTriangle;", '\u{22EB}', None),
    ("NotRightTriangleBar;", '\u{29D0}', Some('\u{338}')),
    ("NotRightTriangleEqual;", '\u{22ED}', None),
    ("NotSquareSubset;", '\u{228F}', Some('\u{338}')),
    ("NotSquareSubsetEqual;", '\u{22E2}', None),
    ("NotSquareSuperset;", '\u{2290}', Some('\u{338}')),
    ("NotSquareSupersetEqual;", '\u{22E3}', None),
    ("NotSubset;", '\u{2282}', Some('\u{20D2}')),
    ("NotSubsetEqual;", '\u{2288}', None),
    ("NotSucceeds;", '\u{2281}', None),
    ("NotSucceedsEqual;", '\u{2AB0}', Some('\u{338}')),
    ("NotSucceedsSlantEqual;", '\u{22E1}', None),
    ("NotSucceedsTilde;", '\u{227F}', Some('\u{338}')),
    ("NotSuperset;", '\u{2283}', Some('\u{20D2}')),
    ("NotSupersetEqual;", '\u{2289}', None),
    ("NotTilde;", '\u{2241}', None),
    ("NotTildeEqual;", '\u{2244}', None),
    ("NotTildeFullEqual;", '\u{2247}', None),
    ("NotTildeTilde;", '\u{2249}', None),
    ("NotVerticalBar;", '\u{2224}', None),
    ("Nscr;", '\u{1D4A9}', None),
    ("Ntilde", '\u{D1}', None),
    ("Ntilde;", '\u{D1}', None),
    ("Nu;", '\u{39D}', None),
    ("OElig;", '\u{152}', None),
    ("Oacute", '\u{D3}', None),
    ("Oacute;", '\u{D3}', None),
    ("Ocirc", '\u{D4}', None),
    ("Ocirc;", '\u{D4}', None),
    ("Ocy;", '\u{41E}', None),
    ("Odblac;", '\u{150}', None),
    ("Ofr;", '\u{1D512}', None),
    ("Ograve", '\u{D2}', None),
    ("Ograve;", '\u{D2}', None),
    ("Omacr;", '\u{14C}', None),
    ("Omega;", '\u{3A9}', None),
    ("Omicron;", '\u{39F}', None),
    ("Oopf;", '\u{1D546}', None),
    ("OpenCurlyDoubleQuote;", '\u{201C}', None),
    ("OpenCurlyQuote;", '\u{2018}', None),
    ("Or;", '\u{2A54}', None),
    ("Oscr;", '\u{1D4AA}', None),
    ("Oslash", '\u{D8}', None),
    ("Oslash;", '\u{D8}', None),
    ("Otilde", '\u{D5}', None),
    ("Otilde;", '\u{D5}', None),
    ("Otimes;", '\u{2A37}', None),
    ("Ouml", '\u{D6}', None),
    ("Ouml;", '\u{D6}', None),
    ("OverBar;", '\u{203E}', None),
    ("OverBrace;", '\u{23DE}', None),
    ("OverBracket;", '\u{23B4}', None),
    ("OverParenthesis;", '\u{23DC}', None),
    ("PartialD;", '\u{2202}', None),
    ("Pcy;", '\u{41F}', None),
    ("Pfr;", '\u{1D513}', None),
    ("Phi;", '\u{3A6}', None),
    ("Pi;", '\u{3A0}', None),
    ("PlusMinus;", '\u{B1}', None),
    ("Poincareplane;", '\u{210C}', None),
    ("Popf;", '\u{2119}', None),
    ("Pr;", '\u{2ABB}', None),
    ("Precedes;", '\u{227A}', None),
    ("PrecedesEqual;", '\u{2AAF}', None),
    ("PrecedesSlantEqual;", '\u{227C}', None),
    ("PrecedesTilde;", '\u{227E}', None),
    ("Prime;", '\u{2033}', None),
    ("Product;", '\u{220F}', None),
    ("Proportion;", '\u{2237}', None),
    ("Proportional;", '\u{221D}', None),
    ("Pscr;", '\u{1D4AB}', None),
    ("Psi;", '\u{3A8}', None),
    ("QUOT", '\u{22}', None),
    ("QUOT;", '\u{22}', None),
    ("Qfr;", '\u{1D514}', None),
    ("Qopf;", '\u{211A}', None),
    ("Qscr;", '\u{1D4AC}', None),
    ("RBarr;", '\u{2910}', None),
    ("REG", '\u{AE}', None),
    ("REG;", '\u{AE}', None),
    ("Racute;", '\u{154}', None),
    ("Rang;", '\u{27EB}', None),
    ("Rarr;", '\u{21A0}', None),
    ("Rarrtl;", '\u{2916}', None),
    ("Rcaron;", '\u{158}', None),
    ("Rcedil;", '\u{156}', None),
    ("Rcy;", '\u{420}', None),
    ("Re;", '\u{211C}', None),
    ("ReverseElement;", '\u{220B}', None),
    ("ReverseEquilibrium;", '\u{21CB}', None),
    ("ReverseUpEquilibrium;", '\u{296F}', None),
    ("Rfr;", '\u{211C}', None),
    ("Rho;", '\u{3A1}', None),
    ("RightAngleBracket;", '\u{27E9}', None),
    ("RightArrow;", '\u{2192}', None),
    ("RightArrowBar;", '\u{21E5}', None),
    ("RightArrowLeftArrow;", '\u{21C4}', None),
    ("RightCeiling;", '\u{2309}', None),
    ("RightDoubleBracket;", '\u{27E7}', None),
    ("RightDownTeeVector;", '\u{295D}', None),
    ("RightDownVector;", '\u{21C2}', None),
    ("RightDownVectorBar;", '\u{2955}', None),
    ("RightFloor;", '\u{230B}', None),
    ("RightTee;", '\u{22A2}', None),
    ("RightTeeArrow;", '\u{21A6}', None),
    ("RightTeeVector;", '\u{295B}', None),
    ("RightTriangle;", '\u{22B3}', None),
    ("RightTriangleBar;", '\u{29D0}', None),
    ("RightTriangleEqual;", '\u{22B5}', None),
    ("RightUpDownVector;", '\u{294F}', None),
    ("RightUpTeeVector;", '\u{295C}', None),
    ("RightUpVector;", '\u{21BE}', None),
    ("RightUpVectorBar;", '\u{2954}', None),
    ("RightVector;", '\u{21C0}', None),
    ("RightVectorBar;", '\u{2953}', None),
    ("Rightarrow;", '\u{21D2}', None),
    ("Ropf;", '\u{211D}', None),
    ("RoundImplies;", '\u{2970}', None),
    ("Rrightarrow;", '\u{21DB}', None),
    ("Rscr;", '\u{211B}', None),
    ("Rsh;", '\u{21B1}', None),
    ("RuleDelayed;", '\u{29F4}', None),
    ("SHCHcy;", '\u{429}', None),
    ("SHcy;", '\u{428}', None),
    ("SOFTcy;", '\u{42C}', None),
    ("Sacute;", '\u{15A}', None),
    ("Sc;", '\u{2ABC}', None),
    ("Scaron;", '\u{160}', None),
    ("Scedil;", '\u{15E}', None),
    ("Scirc;", '\u{15C}', None),
    ("Scy;", '\u{421}', None),
    ("Sfr;", '\u{1D516}', None),
    ("ShortDownArrow;", '\u{2193}', None),
    ("ShortLeftArrow;", '\u{2190}', None),
    ("ShortRightArrow;", '\u{2192}', None),
    ("ShortUpArrow;", '\u{2191}', None),
    ("Sigma;", '\u{3A3}', None),
    ("SmallCircle;", '\u{2218}', None),
    ("Sopf;", '\u{1D54A}', None),
    ("Sqrt;", '\u{221A}', None),
    ("Square;", '\u{25A1}', None),
    ("SquareIntersection;", '\u{2293}', None),
    ("SquareSubset;", '\u{228F}', None),
    ("SquareSubsetEqual;", '\u{2291}', None),
    ("SquareSuperset;", '\u{2290}', None),
    ("SquareSupersetEqual;", '\u{2292}', None),
    ("SquareUnion;", '\u{2294}', None),
    ("Sscr;", '\u{1D4AE}', None),
    ("Star;", '\u{22C6}', None),
    ("Sub;", '\u{22D0}', None),
    ("Subset;", '\u{22D0}', None),
    ("SubsetEqual;", '\u{2286}', None),
    ("Succeeds;", '\u{227B}', None),
    ("SucceedsEqual;", '\u{2AB0}', None),
    ("SucceedsSlantEqual;", '\u{227D}', None),
    ("SucceedsTilde;", '\u{227F}', None),
    ("SuchThat;", '\u{220B}', None),
    ("Sum;", '\u{2211}', None),
    ("Sup;", '\u{22D1}', None),
    ("Superset;", '\u{2283}', None),
    ("SupersetEqual;", '\u{2287}', None),
    ("Supset;", '\u{22D1}', None),
    ("THORN", '\u{DE}', None),
    ("THORN;", '\u{DE}', None),
    ("TRADE;", '\u{2122}', None),
    ("TSHcy;", '\u{40B}', None),
    ("TScy;", '\u{426}', None),
    ("Tab;", '\u{9}', None),
    ("Tau;", '\u{3A4}', None),
    ("Tcaron;", '\u{164}', None),
    ("Tcedil;", '\u{162}', None),
    ("Tcy;", '\u{422}', None),
    ("Tfr;", '\u{1D517}', None),
    ("Therefore;", '\u{2234}', None),
    ("Theta;", '\u{398}', None),
    ("ThickSpace;", '\u{205F}', Some('\u{200A}')),
    ("ThinSpace;", '\u{2009}', None),
    ("Tilde;", '\u{223C}', None),
    ("TildeEqual;", '\u{2243}', None),
    ("TildeFullEqual;", '\u{2245}', None),
    ("TildeTilde;", '\u{2248}', None),
    ("Topf;", '\u{1D54B}', None),
    ("TripleDot;", '\u{20DB}', None),
    ("Tscr;", '\u{1D4AF}', None),
    ("Tstrok;", '\u{166}', None),
    ("Uacute", '\u{DA}', None),
    ("Uacute;", '\u{DA}', None),
    ("Uarr;", '\u{219F}', None),
    ("Uarrocir;", '\u{2949}', None),
    ("Ubrcy;", '\u{40E}', None),
    ("Ubreve;", '\u{16C}', None),
    ("Ucirc", '\u{DB}', None),
    ("Ucirc;", '\u{DB}', None),
    ("Ucy;", '\u{423}', None),
    ("Udblac;", '\u{170}', None),
    ("Ufr;", '\u{1D518}', None),
    ("Ugrave", '\u{D9}', None),
    ("Ugrave;", '\u{D9}', None),
    ("Umacr;", '\u{16A}', None),
    ("UnderBar;", '\u{5F}', None),
    ("UnderBrace;", '\u{23DF}', None),
    ("UnderBracket;", '\u{23B5}', None),
    ("UnderParenthesis;", '\u{23DD}', None),
    ("Union;", '\u{22C3}', None),
    ("UnionPlus;", '\u{228E}', None),
    ("Uogon;", '\u{172}', None),
    ("Uopf;", '\u{1D54C}', None),
    ("UpArrow;", '\u{2191}', None),
    ("UpArrowBar;", '\u{2912}', None),
    ("UpArrowDownArrow;", '\u{21C5}', None),
    ("UpDownArrow;", '\u{2195}', None),
    ("UpEquilibrium;", '\u{296E}', None),
    ("UpTee;", '\u{22A5}', None),
    ("UpTeeArrow;", '\u{21A5}', None),
    ("Uparrow;", '\u{21D1}', None),
    ("Updownarrow;", '\u{21D5}', None),
    ("UpperLeftArrow;", '\u{2196}', None),
    ("UpperRightArrow;", '\u{2197}', None),
    ("Upsi;", '\u{3D2}', None),
    ("Upsilon;", '\u{3A5}', None),
    ("Uring;", '\u{16E}', None),
    ("Uscr;", '\u{1D4B0}', None),
    ("Utilde;", '\u{168}', None),
    ("Uuml", '\u{DC}', None),
    ("Uuml;", '\u{DC}', None),
    ("VDash;", '\u{22AB}', None),
    ("Vbar;", '\u{2AEB}', None),
    ("Vcy;", '\u{412}', None),
    ("Vdash;", '\u{22A9}', None),
    ("Vdashl;", '\u{2AE6}', None),
    ("Vee;", '\u{22C1}', None),
    ("Verbar;", '\u{2016}', None),
    ("Vert;", '\u{2016}', None),
    ("VerticalBar;", '\u{2223}', None),
    ("VerticalLine;", '\u{7C}', None),
    ("VerticalSeparator;", '\u{2758}', None),
    ("VerticalTilde;", '\u{2240}', None),
    ("VeryThinSpace;", '\u{200A}', None),
    ("Vfr;", '\u{1D519}', None),
    ("Vopf;", '\u{1D54D}', None),
    ("Vscr;", '\u{1D4B1}', None),
    ("Vvdash;", '\u{22AA}', None),
    ("Wcirc;", '\u{174}', None),
    ("Wedge;", '\u{22C0}', None),
    ("Wfr;", '\u{1D51A}', None),
    ("Wopf;", '\u{1D54E}', None),
    ("Wscr;", '\u{1D4B2}', None),
    ("Xfr;", '\u{1D51B}', None),
    ("Xi;", '\u{39E}', None),
    ("Xopf;", '\u{1D54F}', None),
    ("Xscr;", '\u{1D4B3}', None),
    ("YAcy;", '\u{42F}', None),
    ("YIcy;", '\u{407}', None),
    ("YUcy;", '\u{42E}', None),
    ("Yacute", '\u{DD}', None),
    ("Yacute;", '\u{DD}', None),
    ("Ycirc;", '\u{176}', None),
    ("Ycy;", '\u{42B}', None),
    ("Yfr;", '\u{1D51C}', None),
    ("Yopf;", '\u{1D550}', None),
    ("Yscr;", '\u{1D4B4}', None),
    ("Yuml;", '\u{178}', None),
    ("ZHcy;", '\u{416}', None),
    ("Zacute;", '\u{179}', None),
    ("Zcaron;", '\u{17D}', None),
    ("Zcy;", '\u{417}', None),
    ("Zdot;", '\u{17B}', None),
    ("ZeroWidthSpace;", '\u{200B}', None),
    ("Zeta;", '\u{396}', None),
    ("Zfr;", '\u{2128}', None),
    ("Zopf;", '\u{2124}', None),
    ("Zscr;", '\u{1D4B5}', None),
    ("aacute", '\u{E1}', None),
    ("aacute;", '\u{E1}', None),
    ("abreve;", '\u{103}', None),
    ("ac;", '\u{223E}', None),
    ("acE;", '\u{223E}', Some('\u{333}')),
    ("acd;", '\u{223F}', None),
    ("acirc", '\u{E2}', None),
    ("acirc;", '\u{E2}', None),
    ("acute", '\u{B4}', None),
    ("acute;", '\u{B4}', None),
    ("acy;", '\u{430}', None),
    ("aelig", '\u{E6}', None),
    ("aelig;", '\u{E6}', None),
    ("af;", '\u{2061}', None),
    ("afr;", '\u{1D51E}', None),
    ("agrave", '\u{E0}', None),
    ("agrave;", '\u{E0}', None),
    ("alefsym;", '\u{2135}', None),
    ("aleph;", '\u{2135}', None),
    ("alpha;", '\u{3B1}', None),
    ("amacr;", '\u{101}', None),
    ("amalg;", '\u{2A3F}', None),
    ("amp", '\u{26}', None),
    ("amp;", '\u{26}', None),
    ("and;", '\u{2227}', None),
    ("andand;", '\u{2A55}', None),
    ("andd;", '\u{2A5C}', None),
    ("andslope;", '\u{2A58}', None),
    ("andv;", '\u{2A5A}', None),
    ("ang;", '\u{2220}', None),
    ("ange;", '\u{29A4}', None),
    ("angle;", '\u{2220}', None),
    ("angmsd;", '\u{2221}', None),
    ("angmsdaa;", '\u{29A8}', None),
    ("angmsdab;", '\u{29A9}', None),
    ("angmsdac;", '\u{29AA}', None),
    ("angmsdad;", '\u{29AB}', None),
    ("angmsdae;", '\u{29AC}', None),
    ("angmsdaf;", '\u{29AD}', None),
    ("angmsdag;", '\u{29AE}', None),
    ("angmsdah;", '\u{29AF}', None),
    ("angrt;", '\u{221F}', None),
    ("angrtvb;", '\u{22BE}', None),
    ("angrtvbd;", '\u{299D}', None),
    ("angsph;", '\u{2222}', None),
    ("angst;", '\u{C5}', None),
    ("angzarr;", '\u{237C}', None),
    ("aogon;", '\u{105}', None),
    ("aopf;", '\u{1D552}', None),
    ("ap;", '\u{2248}', None),
    ("apE;", '\u{2A70}', None),
    ("apacir;", '\u{2A6F}', None),
    ("ape;", '\u{224A}', None),
    ("apid;", '\u{224B}', None),
    ("apos;", '\u{27}', None),
    ("approx;", '\u{2248}', None),
    ("approxeq;", '\u{224A}', None),
    ("aring", '\u{E5}', None),
    ("aring;", '\u{E5}', None),
    ("ascr;", '\u{1D4B6}', None),
    ("ast;", '\u{2A}', None),
    ("asymp;", '\u{2248}', None),
    ("asympeq;", '\u{224D}', None),
    ("atilde", '\u{E3}', None),
    ("atilde;", '\u{E3}', None),
    ("auml", '\u{E4}', None),
    ("auml;", '\u{E4}', None),
    ("awconint;", '\u{2233}', None),
    ("awint;", '\u{2A11}', None),
    ("bNot;", '\u{2AED}', None),
    ("backcong;", '\u{224C}', None),
    ("backepsilon;", '\u{3F6}', None),
    ("backprime;", '\u{2035}', None),
    ("backsim;", '\u{223D}', None),
    ("backsimeq;", '\u{22CD}', None),
    ("barvee;", '\u{22BD}', None),
    ("barwed;", '\u{2305}', None),
    ("barwedge;", '\u{2305}', None),
    ("bbrk;", '\u{23B5}', None),
    ("bbrktbrk;", '\u{23B6}', None),
    ("bcong;", '\u{224C}', None),
    ("bcy;", '\u{431}', None),
    ("bdquo;", '\u{201E}', None),
    ("becaus;", '\u{2235}', None),
    ("because;", '\u{2235}', None),
    ("bemptyv;", '\u{29B0}', None),
    ("bepsi;", '\u{3F6}', None),
    ("bernou;", '\u{212C}', None),
    ("beta;", '\u{3B2}', None),
    ("beth;", '\u{2136}', None),
    ("between;", '\u{226C}', None),
    ("bfr;", '\u{1D51F}', None),
    ("bigcap;", '\u{22C2}', None),
    ("bigcirc;", '\u{25EF}', None),
    ("bigcup;", '\u{22C3}', None),
    ("bigodot;", '\u{2A00}', None),
    ("bigoplus;", '\u{2A01}', None),
    ("bigotimes;", '\u{2A02}', None),
    ("bigsqcup;", '\u{2A06}', None),
    ("bigstar;", '\u{2605}', None),
    ("bigtriangledown;", '\u{25BD}', None),
    ("bigtriangleup;", '\u{25B3}', None),
    ("biguplus;", '\u{2A04}', None),
    ("bigvee;", '\u{22C1}', None),
    ("bigwedge;", '\u{22C0}', None),
    ("bkarow;", '\u{290D}', None),
    ("blacklozenge;", '\u{29EB}', None),
    ("blacksquare;", '\u{25AA}', None),
    ("blacktriangle;", '\u{25B4}', None),
    ("blacktriangledown;", '\u{25BE}', None),
    ("blacktriangleleft;", '\u{25C2}', None),
    ("blacktriangleright;", '\u{25B8}', None),
    ("blank;", '\u{2423}', None),
    ("blk12;", '\u{2592}', None),
    ("blk14;", '\u{2591}', None),
    ("blk34;", '\u{2593}', None),
    ("block;", '\u{2588}', None),
    ("bne;", '\u{3D}', Some('\u{20E5}')),
    ("bnequiv;", '\u{2261}', Some('\u{20E5}')),
    ("bnot;", '\u{2310}', None),
    ("bopf;", '\u{1D553}', None),
    ("bot;", '\u{22A5}', None),
    ("bottom;", '\u{22A5}', None),
    ("bowtie;", '\u{22C8}', None),
    ("boxDL;", '\u{2557}', None),
    ("boxDR;", '\u{2554}', None),
    ("boxDl;", '\u{2556}', None),
    ("boxDr;", '\u{2553}', None),
    ("boxH;", '\u{2550}', None),
    ("boxHD;", '\u{2566}', None),
    ("boxHU;", '\u{2569}', None),
    ("boxHd;", '\u{2564}', None),
    ("boxHu;", '\u{2567}', None),
    ("boxUL;", '\u{255D}', None),
    ("boxUR;", '\u{255A}', None),
    ("boxUl;", '\u{255C}', None),
    ("boxUr;", '\u{2559}', None),
    ("boxV;", '\u{2551}', None),
    ("boxVH;", '\u{256C}', None),
    ("boxVL;", '\u{2563}', None),
    ("boxVR;", '\u{2560}', None),
    ("boxVh;", '\u{256B}', None),
    ("boxVl;", '\u{2562}', None),
    ("boxVr;", '\u{255F}', None),
    ("boxbox;", '\u{29C9}', None),
    ("boxdL;", '\u{2555}', None),
    ("boxdR;", '\u{2552}', None),
    ("boxdl;", '\u{2510}', None),
    ("boxdr;", '\u{250C}', None),
    ("boxh;", '\u{2500}', None),
    ("boxhD;", '\u{2565}', None),
    ("boxhU;", '\u{2568}', None),
    ("boxhd;", '\u{252C}', None),
    ("boxhu;", '\u{2534}', None),
    ("boxminus;", '\u{229F}', None),
    ("boxplus;", '\u{229E}', None),
    ("boxtimes;", '\u{22A0}', None),
    ("boxuL;", '\u{255B}', None),
    ("boxuR;", '\u{2558}', None),
    ("boxul;", '\u{2518}', None),
    ("boxur;", '\u{2514}', None),
    ("boxv;", '\u{2502}', None),
    ("boxvH;", '\u{256A}', None),
    ("boxvL;", '\u{2561}', None),
    ("boxvR;", '\u{255E}', None),
    ("boxvh;", '\u{253C}', None),
    ("boxvl;", '\u{2524}', None),
    ("boxvr;", '\u{251C}', None),
    ("bprime;", '\u{2035}', None),
    ("breve;", '\u{2D8}', None),
    ("brvbar", '\u{A6}', None),
    ("brvbar;", '\u{A6}', None),
    ("bscr;", '\u{1D4B7}', None),
    ("bsemi;", '\u{204F}', None),
    ("bsim;", '\u{223D}', None),
    ("bsime;", '\u{22CD}', None),
    ("bsol;", '\u{5C}', None),
    ("bsolb;", '\u{29C5}', None),
    ("bsolhsub;", '\u{27C8}', None),
    ("bull;", '\u{2022}', None),
    ("bullet;", '\u{2022}', None),
    ("bump;", '\u{224E}', None),
    ("bumpE;", '\u{2AAE}', None),
    ("bumpe;", '\u{224F}', None),
    ("bumpeq;", '\u{224F}', None),
    ("cacute;", '\u{107}', None),
    ("cap;", '\u{2229}', None),
    ("capand;", '\u{2A44}', None),
    ("capbrcup;", '\u{2A49}', None),
    ("capcap;", '\u{2A4B}', None),
    ("capcup;", '\u{2A47}', None),
    ("capdot;", '\u{2A40}', None),
    ("caps;", '\u{2229}', Some('\u{FE00}')),
    ("caret;", '\u{2041}', None),
    ("caron;", '\u{2C7}', None),
    ("ccaps;", '\u{2A4D}', None),
    ("ccaron;", '\u{10D}', None),
    ("ccedil", '\u{E7}', None),
    ("ccedil;", '\u{E7}', None),
    ("ccirc;", '\u{109}', None),
    ("ccups;", '\u{2A4C}', None),
    ("ccupssm;", '\u{2A50}', None),
    ("cdot;", '\u{10B}', None),
    ("cedil", '\u{B8}', None),
    ("cedil;", '\u{B8}', None),
    ("cemptyv;", '\u{29B2}', None),
    ("cent", '\u{A2}', None),
    ("cent;", '\u{A2}', None),
    ("centerdot;", '\u{B7}', None),
    ("cfr;", '\u{1D520}', None),
    ("chcy;", '\u{447}', None),
    ("check;", '\u{2713}', None),
    ("checkmark;", '\u{2713}', None),
    ("chi;", '\u{3C7}', None),
    ("cir;", '\u{25CB}', None),
    ("cirE;", '\u{29C3}', None),
    ("circ;", '\u{2C6}', None),
    ("circeq;", '\u{2257}', None),
    ("circlearrowleft;", '\u{21BA}', None),
    ("circlearrowright;", '\u{21BB}', None),
    ("circledR;", '\u{AE}', None),
    ("circledS;", '\u{24C8}', None),
    ("circledast;", '\u{229B}', None),
    ("circledcirc;", '\u{229A}', None),
    ("circleddash;", '\u{229D}', None),
    ("cire;", '\u{2257}', None),
    ("cirfnint;", '\u{2A10}', None),
    ("cirmid;", '\u{2AEF}', None),
    ("cirscir;", '\u{29C2}', None),
    ("clubs;", '\u{2663}', None),
    ("clubsuit;", '\u{2663}', None),
    ("colon;", '\u{3A}', None),
    ("colone;", '\u{2254}', None),
    ("coloneq;", '\u{2254}', None),
    ("comma;", '\u{2C}', None),
    ("commat;", '\u{40}', None),
    ("comp;", '\u{2201}', None),
    ("compfn;", '\u{2218}', None),
    ("complement;", '\u{2201}', None),
    ("complexes;", '\u{2102}', None),
    ("cong;", '\u{2245}', None),
    ("congdot;", '\u{2A6D}', None),
    ("conint;", '\u{222E}', None),
    ("copf;", '\u{1D554}', None),
    ("coprod;", '\u{2210}', None),
    ("copy", '\u{A9}', None),
    ("copy;", '\u{A9}', None),
    ("copysr;", '\u{2117}', None),
    ("crarr;", '\u{21B5}', None),
    ("cross;", '\u{2717}', None),
    ("cscr;", '\u{1D4B8}', None),
    ("csub;", '\u{2ACF}', None),
    ("csube;", '\u{2AD1}', None),
    ("csup;", '\u{2AD0}', None),
    ("csupe;", '\u{2AD2}', None),
    ("ctdot;", '\u{22EF}', None),
    ("cudarrl;", '\u{2938}', None),
    ("cudarrr;", '\u{2935}', None),
    ("cuepr;", '\u{22DE}', None),
    ("cuesc;", '\u{22DF}', None),
    ("cularr;", '\u{21B6}', None),
    ("cularrp;", '\u{293D}', None),
    ("cup;", '\u{222A}', None),
    ("cupbrcap;", '\u{2A48}', None),
    ("cupcap;", '\u{2A46}', None),
    ("cupcup;", '\u{2A4A}', None),
    ("cupdot;", '\u{228D}', None),
    ("cupor;", '\u{2A45}', None),
    ("cups;", '\u{222A}', Some('\u{FE00}')),
    ("curarr;", '\u{21B7}', None),
    ("curarrm;", '\u{293C}', None),
    ("curlyeqprec;", '\u{22DE}', None),
    ("curlyeqsucc;", '\u{22DF}', None),
    ("curlyvee;", '\u{22CE}', None),
    ("curlywedge;", '\u{22CF}', None),
    ("curren", '\u{A4}', None),
    ("curren;", '\u{A4}', None),
    ("curvearrowleft;", '\u{21B6}', None),
    ("curvearrowright;", '\u{21B7}', None),
    ("cuvee;", '\u{22CE}', None),
    ("cuwed;", '\u{22CF}', None),
    ("cwconint;", '\u{2232}', None),
    ("cwint;", '\u{2231}', None),
    ("cylcty;", '\u{232D}', None),
    ("dArr;", '\u{21D3}', None),
    ("dHar;", '\u{2965}', None),
    ("dagger;", '\u{2020}', None),
    ("daleth;", '\u{2138}', None),
    ("darr;", '\u{2193}', None),
    ("dash;", '\u{2010}', None),
    ("dashv;", '\u{22A3}', None),
    ("dbkarow;", '\u{290F}', None),
    ("dblac;", '\u{2DD}', None),
    ("dcaron;", '\u{10F}', None),
    ("dcy;", '\u{434}', None),
    ("dd;", '\u{2146}', None),
    ("ddagger;", '\u{2021}', None),
    ("ddarr;", '\u{21CA}', None),
    ("ddotseq;", '\u{2A77}', None),
    ("deg", '\u{B0}', None),
    ("deg;", '\u{B0}', None),
    ("delta;", '\u{3B4}', None),
    ("demptyv;", '\u{29B1}', None),
    ("dfisht;", '\u{297F}', None),
    ("dfr;", '\u{1D521}', None),
    ("dharl;", '\u{21C3}', None),
    ("dharr;", '\u{21C2}', None),
    ("diam;", '\u{22C4}', None),
    ("diamond;", '\u{22C4}', None),
    ("diamondsuit;", '\u{2666}', None),
    ("diams;", '\u{2666}', None),
    ("die;", '\u{A8}', None),
    ("digamma;", '\u{3DD}', None),
    ("disin;", '\u{22F2}', None),
    ("div;", '\u{F7}', None),
    ("divide", '\u{F7}', None),
    ("divide;", '\u{F7}', None),
    ("divideontimes;", '\u{22C7}', None),
    ("divonx;", '\u{22C7}', None),
    ("djcy;", '\u{452}', None),
    ("dlcorn;", '\u{231E}', None),
    ("dlcrop;", '\u{230D}', None),
    ("dollar;", '\u{24}', None),
    ("dopf;", '\u{1D555}', None),
    ("dot;", '\u{2D9}', None),
    ("doteq;", '\u{2250}', None),
    ("doteqdot;", '\u{2251}', None),
    ("dotminus;", '\u{2238}', None),
    ("dotplus;", '\u{2214}', None),
    ("dotsquare;", '\u{22A1}', None),
    ("doublebarwedge;", '\u{2306}', None),
    ("downarrow;", '\u{2193}', None),
    ("downdownarrows;", '\u{21CA}', None),
    ("downharpoonleft;", '\u{21C3}', None),
    ("downharpoonright;", '\u{21C2}', None),
    ("drbkarow;", '\u{2910}', None),
    ("drcorn;", '\u{231F}', None),
    ("drcrop;", '\u{230C}', None),
    ("dscr;", '\u{1D4B9}', None),
    ("dscy;", '\u{455}', None),
    ("dsol;", '\u{29F6}', None),
    ("dstrok;", '\u{111}', None),
    ("dtdot;", '\u{22F1}', None),
    ("dtri;", '\u{25BF}', None),
    ("dtrif;", '\u{25BE}', None),
    ("duarr;", '\u{21F5}', None),
    ("duhar;", '\u{296F}', None),
    ("dwangle;", '\u{29A6}', None),
    ("dzcy;", '\u{45F}', None),
    ("dzigrarr;", '\u{27FF}', None),
    ("eDDot;", '\u{2A77}', None),
    ("eDot;", '\u{2251}', None),
    ("eacute", '\u{E9}', None),
    ("eacute;", '\u{E9}', None),
    ("easter;", '\u{2A6E}', None),
    ("ecaron;", '\u{11B}', None),
    ("ecir;", '\u{2256}', None),
    ("ecirc", '\u{EA}', None),
    ("ecirc;", '\u{EA}', None),
    ("ecolon;", '\u{2255}', None),
    ("ecy;", '\u{44D}', None),
    ("edot;", '\u{117}', None),
    ("ee;", '\u{2147}', None),
    ("efDot;", '\u{2252}', None),
    ("efr;", '\u{1D522}', None),
    ("eg;", '\u{2A9A}', None),
    ("egrave", '\u{E8}', None),
    ("egrave;", '\u{E8}', None),
    ("egs;", '\u{2A96}', None),
    ("egsdot;", '\u{2A98}', None),
    ("el;", '\u{2A99}', None),
    ("elinters;", '\u{23E7}', None),
    ("ell;", '\u{2113}', None),
    ("els;", '\u{2A95}', None),
    ("elsdot;", '\u{2A97}', None),
    ("emacr;", '\u{113}', None),
    ("empty;", '\u{2205}', None),
    ("emptyset;", '\u{2205}', None),
    ("emptyv;", '\u{2205}', None),
    ("emsp13;", '\u{2004}', None),
    ("emsp14;", '\u{2005}', None),
    ("emsp;", '\u{2003}', None),
    ("eng;", '\u{14B}', None),
    ("ensp;", '\u{2002}', None),
    ("eogon;", '\u{119}', None),
    ("eopf;", '\u{1D556}', None),
    ("epar;", '\u{22D5}', None),
    ("eparsl;", '\u{29E3}', None),
    ("eplus;", '\u{2A71}', None),
    ("epsi;", '\u{3B5}', None),
    ("epsilon;", '\u{3B5}', None),
    ("epsiv;", '\u{3F5}', None),
    ("eqcirc;", '\u{2256}', None),
    ("eqcolon;", '\u{2255}', None),
    ("eqsim;", '\u{2242}', None),
    ("eqslantgtr;", '\u{2A96}', None),
    ("eqslantless;", '\u{2A95}', None),
    ("equals;", '\u{3D}', None),
    ("equest;", '\u{225F}', None),
    ("equiv;", '\u{2261}', None),
    ("equivDD;", '\u{2A78}', None),
    ("eqvparsl;", '\u{29E5}', None),
    ("erDot;", '\u{2253}', None),
    ("erarr;", '\u{2971}', None),
    ("escr;", '\u{212F}', None),
    ("esdot;", '\u{2250}', None),
    ("esim;", '\u{2242}', None),
    ("eta;", '\u{3B7}', None),
    ("eth", '\u{F0}', None),
    ("eth;", '\u{F0}', None),
    ("euml", '\u{EB}', None),
    ("euml;", '\u{EB}', None),
    ("euro;", '\u{20AC}', None),
    ("excl;", '\u{21}', None),
    ("exist;", '\u{2203}', None),
    ("expectation;", '\u{2130}', None),
    ("exponentiale;", '\u{2147}', None),
    ("fallingdotseq;", '\u{2252}', None),
    ("fcy;", '\u{444}', None),
    ("female;", '\u{2640}', None),
    ("ffilig;", '\u{FB03}', None),
    ("fflig;", '\u{FB00}', None),
    ("ffllig;", '\u{FB04}', None),
    ("ffr;", '\u{1D523}', None),
    ("filig;", '\u{FB01}', None),
    ("fjlig;", '\u{66}', Some('\u{6A}')),
    ("flat;", '\u{266D}', None),
    ("fllig;", '\u{FB02}', None),
    ("fltns;", '\u{25B1}', None),
    ("fnof;", '\u{192}', None),
    ("fopf;", '\u{1D557}', None),
    ("forall;", '\u{2200}', None),
    ("fork;", '\u{22D4}', None),
    ("forkv;", '\u{2AD9}', None),
    ("fpartint;", '\u{2A0D}', None),
    ("frac12", '\u{BD}', None),
    ("frac12;", '\u{BD}', None),
    ("frac13;", '\u{2153}', None),
    ("frac14", '\u{BC}', None),
    ("frac14;", '\u{BC}', None),
    ("frac15;", '\u{2155}', None),
    ("frac16;", '\u{2159}', None),
    ("frac18;", '\u{215B}', None),
    ("frac23;", '\u{2154}', None),
    ("frac25;", '\u{2156}', None),
    ("frac34", '\u{BE}', None),
    ("frac34;", '\u{BE}', None),
    ("frac35;", '\u{2157}', None),
    ("frac38;", '\u{215C}', None),
    ("frac45;", '\u{2158}', None),
    ("frac56;", '\u{215A}', None),
    ("frac58;", '\u{215D}', None),
    ("frac78;", '\u{215E}', None),
    ("frasl;", '\u{2044}', None),
    ("frown;", '\u{2322}', None),
    ("fscr;", '\u{1D4BB}', None),
    ("gE;", '\u{2267}', None),
    ("gEl;", '\u{2A8C}', None),
    ("gacute;", '\u{1F5}', None),
    ("gamma;", '\u{3B3}', None),
    ("gammad;", '\u{3DD}', None),
    ("gap;", '\u{2A86}', None),
    ("gbreve;", '\u{11F}', None),
    ("gcirc;", '\u{11D}', None),
    ("gcy;", '\u{433}', None),
    ("gdot;", '\u{121}', None),
    ("ge;", '\u{2265}', None),
    ("gel;", '\u{22DB}', None),
    ("geq;", '\u{2265}', None),
    ("geqq;", '\u{2267}', None),
    ("geqslant;", '\u{2A7E}', None),
    ("ges;", '\u{2A7E}', None),
    ("gescc;", '\u{2AA9}', None),
    ("gesdot;", '\u{2A80}', None),
    ("gesdoto;", '\u{2A82}', None),
    ("gesdotol;", '\u{2A84}', None),
    ("gesl;", '\u{22DB}', Some('\u{FE00}')),
    ("gesles;", '\u{2A94}', None),
    ("gfr;", '\u{1D524}', None),
    ("gg;", '\u{226B}', None),
    ("ggg;", '\u{22D9}', None),
    ("gimel;", '\u{2137}', None),
    ("gjcy;", '\u{453}', None),
    ("gl;", '\u{2277}', None),
    ("glE;", '\u{2A92}', None),
    ("gla;", '\u{2AA5}', None),
    ("glj;", '\u{2AA4}', None),
    ("gnE;", '\u{2269}', None),
    ("gnap;", '\u{2A8A}', None),
    ("gnapprox;", '\u{2A8A}', None),
    ("gne;", '\u{2A88}', None),
    ("gneq;", '\u{2A88}', None),
    ("gneqq;", '\u{2269}', None),
    ("gnsim;", '\u{22E7}', None),
    ("gopf;", '\u{1D558}', None),
    ("grave;", '\u{60}', None),
    ("gscr;", '\u{210A}', None),
    ("gsim;", '\u{2273}', None),
    ("gsime;", '\u{2A8E}', None),
    ("gsiml;", '\u{2A90}', None),
    ("gt", '\u{3E}', None),
    ("gt;", '\u{3E}', None),
    ("gtcc;", '\u{2AA7}', None),
    ("gtcir;", '\u{2A7A}', None),
    ("gtdot;", '\u{22D7}', None),
    ("gtlPar;", '\u{2995}', None),
    ("gtquest;", '\u{2A7C}', None),
    ("gtrapprox;", '\u{2A86}', None),
    ("gtrarr;", '\u{2978}', None),
    ("gtrdot;", '\u{22D7}', None),
    ("gtreqless;", '\u{22DB}', None),
    ("gtreqqless;", '\u{2A8C}', None),
    ("gtrless;", '\u{2277}', None),
    ("gtrsim;", '\u{2273}', None),
    ("gvertneqq;", '\u{2269}', Some('\u{FE00}')),
    ("gvnE;", '\u{2269}', Some('\u{FE00}')),
    ("hArr;", '\u{21D4}', None),
    ("hairsp;", '\u{200A}', None),
    ("half;", '\u{BD}', None),
    ("hamilt;", '\u{210B}', None),
    ("hardcy;", '\u{44A}', None),
    ("harr;", '\u{2194}', None),
    ("harrcir;", '\u{2948}', None),
    ("harrw;", '\u{21AD}', None),
    ("hbar;", '\u{210F}', None),
    ("hcirc;", '\u{125}', None),
    ("hearts;", '\u{2665}', None),
    ("heartsuit;", '\u{2665}', None),
    ("hellip;", '\u{2026}', None),
    ("hercon;", '\u{22B9}', None),
    ("hfr;", '\u{1D525}', None),
    ("hksearow;", '\u{2925}', None),
    ("hkswarow;", '\u{2926}', None),
    ("hoarr;", '\u{21FF}', None),
    ("homtht;", '\u{223B}', None),
    ("hookleftarrow;", '\u{21A9}', None),
    ("hookrightarrow;", '\u{21AA}', None),
    ("hopf;", '\u{1D559}', None),
    ("horbar;", '\u{2015}', None),
    ("hscr;", '\u{1D4BD}', None),
    ("hslash;", '\u{210F}', None),
    ("hstrok;", '\u{127}', None),
    ("hybull;", '\u{2043}', None),
    ("hyphen;", '\u{2010}', None),
    ("iacute", '\u{ED}', None),
    ("iacute;", '\u{ED}', None),
    ("ic;", '\u{2063}', None),
    ("icirc", '\u{EE}', None),
    ("icirc;", '\u{EE}', None),
    ("icy;", '\u{438}', None),
    ("iecy;", '\u{435}', None),
    ("iexcl", '\u{A1}', None),
    ("iexcl;", '\u{A1}', None),
    ("iff;", '\u{21D4}', None),
    ("ifr;", '\u{1D526}', None),
    ("igrave", '\u{EC}', None),
    ("igrave;", '\u{EC}', None),
    ("ii;", '\u{2148}', None),
    ("iiiint;", '\u{2A0C}', None),
    ("iiint;", '\u{222D}', None),
    ("iinfin;", '\u{29DC}', None),
    ("iiota;", '\u{2129}', None),
    ("ijlig;", '\u{133}', None),
    ("imacr;", '\u{12B}', None),
    ("image;", '\u{2111}', None),
    ("imagline;", '\u{2110}', None),
    ("imagpart;", '\u{2111}', None),
    ("imath;", '\u{131}', None),
    ("imof;", '\u{22B7}', None),
    ("imped;", '\u{1B5}', None),
    ("in;", '\u{2208}', None),
    ("incare;", '\u{2105}', None),
    ("infin;", '\u{221E}', None),
    ("infintie;", '\u{29DD}', None),
    ("inodot;", '\u{131}', None),
    ("int;", '\u{222B}', None),
    ("intcal;", '\u{22BA}', None),
    ("integers;", '\u{2124}', None),
    ("intercal;", '\u{22BA}', None),
    ("intlarhk;", '\u{2A17}', None),
    ("intprod;", '\u{2A3C}', None),
    ("iocy;", '\u{451}', None),
    ("iogon;", '\u{12F}', None),
    ("iopf;", '\u{1D55A}', None),
    ("iota;", '\u{3B9}', None),
    ("iprod;", '\u{2A3C}', None),
    ("iquest", '\u{BF}', None),
    ("iquest;", '\u{BF}', None),
    ("iscr;", '\u{1D4BE}', None),
    ("isin;", '\u{2208}', None),
    ("isinE;", '\u{22F9}', None),
    ("isindot;", '\u{22F5}', None),
    ("isins;", '\u{22F4}', None),
    ("isinsv;", '\u{22F3}', None),
    ("isinv;", '\u{2208}', None),
    ("it;", '\u{2062}', None),
    ("itilde;", '\u{129}', None),
    ("iukcy;", '\u{456}', None),
    ("iuml", '\u{EF}', None),
    ("iuml;", '\u{EF}', None),
    ("jcirc;", '\u{135}', None),
    ("jcy;", '\u{439}', None),
    ("jfr;", '\u{1D527}', None),
    ("jmath;", '\u{237}', None),
    ("jopf;", '\u{1D55B}', None),
    ("jscr;", '\u{1D4BF}', None),
    ("jsercy;", '\u{458}', None),
    ("jukcy;", '\u{454}', None),
    ("kappa;", '\u{3BA}', None),
    ("kappav;", '\u{3F0}', None),
    ("kcedil;", '\u{137}', None),
    ("kcy;", '\u{43A}', None),
    ("kfr;", '\u{1D528}', None),
    ("kgreen;", '\u{138}', None),
    ("khcy;", '\u{445}', None),
    ("kjcy;", '\u{45C}', None),
    ("kopf;", '\u{1D55C}', None),
    ("kscr;", '\u{1D4C0}', None),
    ("lAarr;", '\u{21DA}', None),
    ("lArr;", '\u{21D0}', None),
    ("lAtail;", '\u{291B}', None),
    ("lBarr;", '\u{290E}', None),
    ("lE;", '\u{2266}', None),
    ("lEg;", '\u{2A8B}', None),
    ("lHar;", '\u{2962}', None),
    ("lacute;", '\u{13A}', None),
    ("laemptyv;", '\u{29B4}', None),
    ("lagran;", '\u{2112}', None),
    ("lambda;", '\u{3BB}', None),
    ("lang;", '\u{27E8}', None),
    ("langd;", '\u{2991}', None),
    ("langle;", '\u{27E8}', None),
    ("lap;", '\u{2A85}', None),
    ("laquo", '\u{AB}', None),
    ("laquo;", '\u{AB}', None),
    ("larr;", '\u{2190}', None),
    ("larrb;", '\u{21E4}', None),
    ("larrbfs;", '\u{291F}', None),
    ("larrfs;", '\u{291D}', None),
    ("larrhk;", '\u{21A9}', None),
    ("larrlp;", '\u{21AB}', None),
    ("larrpl;", '\u{2939}', None),
    ("larrsim;", '\u{2973}', None),
    ("larrtl;", '\u{21A2}', None),
    ("lat;", '\u{2AAB}', None),
    ("latail;", '\u{2919}', None),
    ("late;", '\u{2AAD}', None),
    ("lates;", '\u{2AAD}', Some('\u{FE00}')),
    ("lbarr;", '\u{290C}', None),
    ("lbbrk;", '\u{2772}', None),
    ("lbrace;", '\u{7B}', None),
    ("lbrack;", '\u{5B}', None),
    ("lbrke;", '\u{298B}', None),
    ("lbrksld;", '\u{298F}', None),
    ("lbrkslu;", '\u{298D}', None),
    ("lcaron;", '\u{13E}', None),
    ("lcedil;", '\u{13C}', None),
    ("lceil;", '\u{2308}', None),
    ("lcub;", '\u{7B}', None),
    ("lcy;", '\u{43B}', None),
    ("ldca;", '\u{2936}', None),
    ("ldquo;", '\u{201C}', None),
    ("ldquor;", '\u{201E}', None),
    ("ldrdhar;", '\u{2967}', None),
    ("ldrushar;", '\u{294B}', None),
    ("ldsh;", '\u{21B2}', None),
    ("le;", '\u{2264}', None),
    ("leftarrow;", '\u{2190}', None),
    ("leftarrowtail;", '\u{21A2}', None),
    ("leftharpoondown;", '\u{21BD}', None),
    ("leftharpoonup;", '\u{21BC}', None),
    ("leftleftarrows;", '\u{21C7}', None),
    ("leftrightarrow;", '\u{2194}', None),
    ("leftrightarrows;", '\u{21C6}', None),
    ("leftrightharpoons;", '\u{21CB}', None),
    ("leftrightsquigarrow;", '\u{21AD}', None),
    ("leftthreetimes;", '\u{22CB}', None),
    ("leg;", '\u{22DA}', None),
    ("leq;", '\u{2264}', None),
    ("leqq;", '\u{2266}', None),
    ("leqslant;", '\u{2A7D}', None),
    ("les;", '\u{2A7D}', None),
    ("lescc;", '\u{2AA8}', None),
    ("lesdot;", '\u{2A7F}', None),
    ("lesdoto;", '\u{2A81}', None),
    ("lesdotor;", '\u{2A83}', None),
    ("lesg;", '\u{22DA}', Some('\u{FE00}')),
    ("lesges;", '\u{2A93}', None),
    ("lessapprox;", '\u{2A85}', None),
    ("lessdot;", '\u{22D6}', None),
    ("lesseqgtr;", '\u{22DA}', None),
    ("lesseqqgtr;", '\u{2A8B}', None),
    ("lessgtr;", '\u{2276}', None),
    ("lesssim;", '\u{2272}', None),
    ("lfisht;", '\u{297C}', None),
    ("lfloor;", '\u{230A}', None),
    ("lfr;", '\u{1D529}', None),
    ("lg;", '\u{2276}', None),
    ("lgE;", '\u{2A91}', None),
    ("lhard;", '\u{21BD}', None),
    ("lharu;", '\u{21BC}', None),
    ("lharul;", '\u{296A}', None),
    ("lhblk;", '\u{2584}', None),
    ("ljcy;", '\u{459}', None),
    ("ll;", '\u{226A}', None),
    ("llarr;", '\u{21C7}', None),
    ("llcorner;", '\u{231E}', None),
    ("llhard;", '\u{296B}', None),
    ("lltri;", '\u{25FA}', None),
    ("lmidot;", '\u{140}', None),
    ("lmoust;", '\u{23B0}', None),
    ("lmoustache;", '\u{23B0}', None),
    ("lnE;", '\u{2268}', None),
    ("lnap;", '\u{2A89}', None),
    ("lnapprox;", '\u{2A89}', None),
    ("lne;", '\u{2A87}', None),
    ("lneq;", '\u{2A87}', None),
    ("lneqq;", '\u{2268}', None),
    ("lnsim;", '\u{22E6}', None),
    ("loang;", '\u{27EC}', None),
    ("loarr;", '\u{21FD}', None),
    ("lobrk;", '\u{27E6}', None),
    ("longleftarrow;", '\u{27F5}', None),
    ("longleftrightarrow;", '\u{27F7}', None),
    ("longmapsto;", '\u{27FC}', None),
    ("longrightarrow;", '\u{27F6}', None),
    ("looparrowleft;", '\u{21AB}', None),
    ("looparrowright;", '\u{21AC}', None),
    ("lopar;", '\u{2985}', None),
    ("lopf;", '\u{1D55D}', None),
    ("loplus;", '\u{2A2D}', None),
    ("lotimes;", '\u{2A34}', None),
    ("lowast;", '\u{2217}', None),
    ("lowbar;", '\u{5F}', None),
    ("loz;", '\u{25CA}', None),
    ("lozenge;", '\u{25CA}', None),
    ("lozf;", '\u{29EB}', None),
    ("lpar;", '\u{28}', None),
    ("lparlt;", '\u{2993}', None),
    ("lrarr;", '\u{21C6}', None),
    ("lrcorner;", '\u{231F}', None),
    ("lrhar;", '\u{21CB}', None),
    ("lrhard;", '\u{296D}', None),
    ("lrm;", '\u{200E}', None),
    ("lrtri;", '\u{22BF}', None),
    ("lsaquo;", '\u{2039}', None),
    ("lscr;", '\u{1D4C1}', None),
    ("lsh;", '\u{21B0}', None),
    ("lsim;", '\u{2272}', None),
    ("lsime;", '\u{2A8D}', None),
    ("lsimg;", '\u{2A8F}', None),
    ("lsqb;", '\u{5B}', None),
    ("lsquo;", '\u{2018}', None),
    ("lsquor;", '\u{201A}', None),
    ("lstrok;", '\u{142}', None),
    ("lt", '\u{3C}', None),
    ("lt;", '\u{3C}', None),
    ("ltcc;", '\u{2AA6}', None),
    ("ltcir;", '\u{2A79}', None),
    ("ltdot;", '\u{22D6}', None),
    ("lthree;", '\u{22CB}', None),
    ("ltimes;", '\u{22C9}', None),
    ("ltlarr;", '\u{2976}', None),
    ("ltquest;", '\u{2A7B}', None),
    ("ltrPar;", '\u{2996}', None),
    ("ltri;", '\u{25C3}', None),
    ("ltrie;", '\u{22B4}', None),
    ("ltrif;", '\u{25C2}', None),
    ("lurdshar;", '\u{294A}', None),
    ("luruhar;", '\u{2966}', None),
    ("lvertneqq;", '\u{2268}', Some('\u{FE00}')),
    ("lvnE;", '\u{2268}', Some('\u{FE00}')),
    ("mDDot;", '\u{223A}', None),
    ("macr", '\u{AF}', None),
    ("macr;", '\u{AF}', None),
    ("male;", '\u{2642}', None),
    ("malt;", '\u{2720}', None),
    ("maltese;", '\u{2720}', None),
    ("map;", '\u{21A6}', None),
    ("mapsto;", '\u{21A6}', None),
    ("mapstodown;", '\u{21A7}', None),
    ("mapstoleft;", '\u{21A4}', None),
    ("mapstoup;", '\u{21A5}', None),
    ("marker;", '\u{25AE}', None),
    ("mcomma;", '\u{2A29}', None),
    ("mcy;", '\u{43C}', None),
    ("mdash;", '\u{2014}', None),
    ("measuredangle;", '\u{2221}', None),
    ("mfr;", '\u{1D52A}', None),
    ("mho;", '\u{2127}', None),
    ("micro", '\u{B5}', None),
    ("micro;", '\u{B5}', None),
    ("mid;", '\u{2223}', None),
    ("midast;", '\u{2A}', None),
    ("midcir;", '\u{2AF0}', None),
    ("middot", '\u{B7}', None),
    ("middot;", '\u{B7}', None),
    ("minus;", '\u{2212}', None),
    ("minusb;", '\u{229F}', None),
    ("minusd;", '\u{2238}', None),
    ("minusdu;", '\u{2A2A}', None),
    ("mlcp;", '\u{2ADB}', None),
    ("mldr;", '\u{2026}', None),
    ("mnplus;", '\u{2213}', None),
    ("models;", '\u{22A7}', None),
    ("mopf;", '\u{1D55E}', None),
    ("mp;", '\u{2213}', None),
    ("mscr;", '\u{1D4C2}', None),
    ("mstpos;", '\u{223E}', None),
    ("mu;", '\u{3BC}', None),
    ("multimap;", '\u{22B8}', None),
    ("mumap;", '\u{22B8}', None),
    ("nGg;", '\u{22D9}', Some('\u{338}')),
    ("nGt;", '\u{226B}', Some('\u{20D2}')),
    ("nGtv;", '\u{226B}', Some('\u{338}')),
    ("nLeftarrow;", '\u{21CD}', None),
    ("nLeftrightarrow;", '\u{21CE}', None),
    ("nLl;", '\u{22D8}', Some('\u{338}')),
    ("nLt;", '\u{226A}', Some('\u{20D2}')),
    ("nLtv;", '\u{226A}', Some('\u{338}')),
    ("nRightarrow;", '\u{21CF}', None),
    ("nVDash;", '\u{22AF}', None),
    ("nVdash;", '\u{22AE}', None),
    ("nabla;", '\u{2207}', None),
    ("nacute;", '\u{144}', None),
    ("nang;", '\u{2220}', Some('\u{20D2}')),
    ("nap;", '\u{2249}', None),
    ("napE;", '\u{2A70}', Some('\u{338}')),
    ("napid;", '\u{224B}', Some('\u{338}')),
    ("napos;", '\u{149}', None),
    ("napprox;", '\u{2249}', None),
    ("natur;", '\u{266E}', None),
    ("natural;", '\u{266E}', None),
    ("naturals;", '\u{2115}', None),
    ("nbsp", '\u{A0}', None),
    ("nbsp;", '\u{A0}', None),
    ("nbump;", '\u{224E}', Some('\u{338}')),
    ("nbumpe;", '\u{224F}', Some('\u{338}')),
    ("ncap;", '\u{2A43}', None),
    ("ncaron;", '\u{148}', None),
    ("ncedil;", '\u{146}', None),
    ("ncong;", '\u{2247}', None),
    ("ncongdot;", '\u{2A6D}', Some('\u{338}')),
    ("ncup;", '\u{2A42}', None),
    ("ncy;", '\u{43D}', None),
    ("ndash;", '\u{2013}', None),
    ("ne;", '\u{2260}', None),
    ("neArr;", '\u{21D7}', None),
    ("nearhk;", '\u{2924}', None),
    ("nearr;", '\u{2197}', None),
    ("nearrow;", '\u{2197}', None),
    ("nedot;", '\u{2250}', Some('\u{338}')),
    ("nequiv;", '\u{2262}', None),
    ("nesear;", '\u{2928}', None),
    ("nesim;", '\u{2242}', Some('\u{338}')),
    ("nexist;", '\u{2204}', None),
    ("nexists;", '\u{2204}', None),
    ("nfr;", '\u{1D52B}', None),
    ("ngE;", '\u{2267}', Some('\u{338}')),
    ("nge;", '\u{2271}', None),
    ("ngeq;", '\u{2271}', None),
    ("ngeqq;", '\u{2267}', Some('\u{338}')),
    ("ngeqslant;", '\u{2A7E}', Some('\u{338}')),
    ("nges;", '\u{2A7E}', Some('\u{338}')),
    ("ngsim;", '\u{2275}', None),
    ("ngt;", '\u{226F}', None),
    ("ngtr;", '\u{226F}', None),
    ("nhArr;", '\u{21CE}', None),
    ("nharr;", '\u{21AE}', None),
    ("nhpar;", '\u{2AF2}', None),
    ("ni;", '\u{220B}', None),
    ("nis;", '\u{22FC}', None),
    ("nisd;", '\u{22FA}', None),
    ("niv;", '\u{220B}', None),
    ("njcy;", '\u{45A}', None),
    ("nlArr;", '\u{21CD}', None),
    ("nlE;", '\u{2266}', Some('\u{338}')),
    ("nlarr;", '\u{219A}', None),
    ("nldr;", '\u{2025}', None),
    ("nle;", '\u{2270}', None),
    ("nleftarrow;", '\u{219A}', None),
    ("nleftrightarrow;", '\u{21AE}', None),
    ("nleq;", '\u{2270}', None),
    ("nleqq;", '\u{2266}', Some('\u{338}')),
    ("nleqslant;", '\u{2A7D}', Some('\u{338}')),
    ("nles;", '\u{2A7D}', Some('\u{338}')),
    ("nless;", '\u{226E}', None),
    ("nlsim;", '\u{2274}', None),
    ("nlt;", '\u{226E}', None),
    ("nltri;", '\u{22EA}', None),
    ("nltrie;", '\u{22EC}', None),
    ("nmid;", '\u{2224}', None),
    ("nopf;", '\u{1D55F}', None),
    ("not", '\u{AC}', None),
    ("not;", '\u{AC}', None),
    ("notin;", '\u{2209}', None),
    ("notinE;", '\u{22F9}', Some('\u{338}')),
    ("notindot;", '\u{22F5}', Some('\u{338}')),
    ("notinva;", '\u{2209}', None),
    ("notinvb;", '\u{22F7}', None),
    ("notinvc;", '\u{22F6}', None),
    ("notni;", '\u{220C}', None),
    ("notniva;", '\u{220C}', None),
    ("notnivb;", '\u{22FE}', None),
    ("notnivc;", '\u{22FD}', None),
    ("npar;", '\u{2226}', None),
    ("nparallel;", '\u{2226}', None),
    ("nparsl;", '\u{2AFD}', Some('\u{20E5}')),
    ("npart;", '\u{2202}', Some('\u{338}')),
    ("npolint;", '\u{2A14}', None),
    ("npr;", '\u{2280}', None),
    ("nprcue;", '\u{22E0}', None),
    ("npre;", '\u{2AAF}', Some('\u{338}')),
    ("nprec;", '\u{2280}', None),
    ("npreceq;", '\u{2AAF}', Some('\u{338}')),
    ("nrArr;", '\u{21CF}', None),
    ("nrarr;", '\u{219B}', None),
    ("nrarrc;", '\u{2933}', Some('\u{338}')),
    ("nrarrw;", '\u{219D}', Some('\u{338}')),
    ("nrightarrow;", '\u{219B}', None),
    ("nrtri;", '\u{22EB}', None),
    ("nrtrie;", '\u{22ED}', None),
    ("nsc;", '\u{2281}', None),
    ("nsccue;", '\u{22E1}', None),
    ("nsce;", '\u{2AB0}', Some('\u{338}')),
    ("nscr;", '\u{1D4C3}', None),
    ("nshortmid;", '\u{2224}', None),
    ("nshortparallel;", '\u{2226}', None),
    ("nsim;", '\u{2241}', None),
    ("nsime;", '\u{2244}', None),
    ("nsimeq;", '\u{2244}', None),
    ("nsmid;", '\u{2224}', None),
    ("nspar;", '\u{2226}', None),
    ("nsqsube;", '\u{22E2}', None),
    ("nsqsupe;", '\u{22E3}', None),
    ("nsub;", '\u{2284}', None),
    ("nsubE;", '\u{2AC5}', Some('\u{338}')),
    ("nsube;", '\u{2288}', None),
    ("nsubset;", '\u{2282}', Some('\u{20D2}')),
    ("nsubseteq;", '\u{2288}', None),
    ("nsubseteqq;", '\u{2AC5}', Some('\u{338}')),
    ("nsucc;", '\u{2281}', None),
    ("nsucceq;", '\u{2AB0}', Some('\u{338}')),
    ("nsup;", '\u{2285}', None),
    ("nsupE;", '\u{2AC6}', Some('\u{338}')),
    ("nsupe;", '\u{2289}', None),
    ("nsupset;", '\u{2283}', Some('\u{20D2}')),
    ("nsupseteq;", '\u{2289}', None),
    ("nsupseteqq;", '\u{2AC6}', Some('\u{338}')),
    ("ntgl;", '\u{2279}', None),
    ("ntilde", '\u{F1}', None),
    ("ntilde;", '\u{F1}', None),
    ("ntlg;", '\u{2278}', None),
    ("ntriangleleft;", '\u{22EA}', None),
    ("ntrianglelefteq;", '\u{22EC}', None),
    ("ntriangleright;", '\u{22EB}', None),
    ("ntrianglerighteq;", '\u{22ED}', None),
    ("nu;", '\u{3BD}', None),
    ("num;", '\u{23}', None),
    ("numero;", '\u{2116}', None),
    ("numsp;", '\u{2007}', None),
    ("nvDash;", '\u{22AD}', None),
    ("nvHarr;", '\u{2904}', None),
    ("nvap;", '\u{224D}', Some('\u{20D2}')),
    ("nvdash;", '\u{22AC}', None),
    ("nvge;", '\u{2265}', Some('\u{20D2}')),
    ("nvgt;", '\u{3E}', Some('\u{20D2}')),
    ("nvinfin;", '\u{29DE}', None),
    ("nvlArr;", '\u{2902}', None),
    ("nvle;", '\u{2264}', Some('\u{20D2}')),
    ("nvlt;", '\u{3C}', Some('\u{20D2}')),
    ("nvltrie;", '\u{22B4}', Some('\u{20D2}')),
    ("nvrArr;", '\u{2903}', None),
    ("nvrtrie;", '\u{22B5}', Some('\u{20D2}')),
    ("nvsim;", '\u{223C}', Some('\u{20D2}')),
    ("nwArr;", '\u{21D6}', None),
    ("nwarhk;", '\u{2923}', None),
    ("nwarr;", '\u{2196}', None),
    ("nwarrow;", '\u{2196}', None),
    ("nwnear;", '\u{2927}', None),
    ("oS;", '\u{24C8}', None),
    ("oacute", '\u{F3}', None),
    ("oacute;", '\u{F3}', None),
    ("oast;", '\u{229B}', None),
    ("ocir;", '\u{229A}', None),
    ("ocirc", '\u{F4}', None),
    ("ocirc;", '\u{F4}', None),
    ("ocy;", '\u{43E}', None),
    ("odash;", '\u{229D}', None),
    ("odblac;", '\u{151}', None),
    ("odiv;", '\u{2A38}', None),
    ("odot;", '\u{2299}', None),
    ("odsold;", '\u{29BC}', None),
    ("oelig;", '\u{153}', None),
    ("ofcir;", '\u{29BF}', None),
    ("ofr;", '\u{1D52C}', None),
    ("ogon;", '\u{2DB}', None),
    ("ograve", '\u{F2}', None),
    ("ograve;", '\u{F2}', None),
    ("ogt;", '\u{29C1}', None),
    ("ohbar;", '\u{29B5}', None),
    ("ohm;", '\u{3A9}', None),
    ("oint;", '\u{222E}', None),
    ("olarr;", '\u{21BA}', None),
    ("olcir;", '\u{29BE}', None),
    ("olcross;", '\u{29BB}', None),
    ("oline;", '\u{203E}', None),
    ("olt;", '\u{29C0}', None),
    ("omacr;", '\u{14D}', None),
    ("omega;", '\u{3C9}', None),
    ("omicron;", '\u{3BF}', None),
    ("omid;", '\u{29B6}', None),
    ("ominus;", '\u{2296}', None),
    ("oopf;", '\u{1D560}', None),
    ("opar;", '\u{29B7}', None),
    ("operp;", '\u{29B9}', None),
    ("oplus;", '\u{2295}', None),
    ("or;", '\u{2228}', None),
    ("orarr;", '\u{21BB}', None),
    ("ord;", '\u{2A5D}', None),
    ("order;", '\u{2134}', None),
    ("orderof;", '\u{2134}', None),
    ("ordf", '\u{AA}', None),
    ("ordf;", '\u{AA}', None),
    ("ordm", '\u{BA}', None),
    ("ordm;", '\u{BA}', None),
    ("origof;", '\u{22B6}', None),
    ("oror;", '\u{2A56}', None),
    ("orslope;", '\u{2A57}', None),
    ("orv;", '\u{2A5B}', None),
    ("oscr;", '\u{2134}', None),
    ("oslash", '\u{F8}', None),
    ("oslash;", '\u{F8}', None),
    ("osol;", '\u{2298}', None),
    ("otilde", '\u{F5}', None),
    ("otilde;", '\u{F5}', None),
    ("otimes;", '\u{2297}', None),
    ("otimesas;", '\u{2A36}', None),
    ("ouml", '\u{F6}', None),
    ("ouml;", '\u{F6}', None),
    ("ovbar;", '\u{233D}', None),
    ("par;", '\u{2225}', None),
    ("para", '\u{B6}', None),
    ("para;", '\u{B6}', None),
    ("parallel;", '\u{2225}', None),
    ("parsim;", '\u{2AF3}', None),
    ("parsl;", '\u{2AFD}', None),
    ("part;", '\u{2202}', None),
    ("pcy;", '\u{43F}', None),
    ("percnt;", '\u{25}', None),
    ("period;", '\u{2E}', None),
    ("permil;", '\u{2030}', None),
    ("perp;", '\u{22A5}', None),
    ("pertenk;", '\u{2031}', None),
    ("pfr;", '\u{1D52D}', None),
    ("phi;", '\u{3C6}', None),
    ("phiv;", '\u{3D5}', None),
    ("phmmat;", '\u{2133}', None),
    ("phone;", '\u{260E}', None),
    ("pi;", '\u{3C0}', None),
    ("pitchfork;", '\u{22D4}', None),
    ("piv;", '\u{3D6}', None),
    ("planck;", '\u{210F}', None),
    ("planckh;", '\u{210E}', None),
    ("plankv;", '\u{210F}', None),
    ("plus;", '\u{2B}', None),
    ("plusacir;", '\u{2A23}', None),
    ("plusb;", '\u{229E}', None),
    ("pluscir;", '\u{2A22}', None),
    ("plusdo;", '\u{2214}', None),
    ("plusdu;", '\u{2A25}', None),
    ("pluse;", '\u{2A72}', None),
    ("plusmn", '\u{B1}', None),
    ("plusmn;", '\u{B1}', None),
    ("plussim;", '\u{2A26}', None),
    ("plustwo;", '\u{2A27}', None),
    ("pm;", '\u{B1}', None),
    ("pointint;", '\u{2A15}', None),
    ("popf;", '\u{1D561}', None),
    ("pound", '\u{A3}', None),
    ("pound;", '\u{A3}', None),
    ("pr;", '\u{227A}', None),
    ("prE;", '\u{2AB3}', None),
    ("prap;", '\u{2AB7}', None),
    ("prcue;", '\u{227C}', None),
    ("pre;", '\u{2AAF}', None),
    ("prec;", '\u{227A}', None),
    ("precapprox;", '\u{2AB7}', None),
    ("preccurlyeq;", '\u{227C}', None),
    ("preceq;", '\u{2AAF}', None),
    ("precnapprox;", '\u{2AB9}', None),
    ("precneqq;", '\u{2AB5}', None),
    ("precnsim;", '\u{22E8}', None),
    ("precsim;", '\u{227E}', None),
    ("prime;", '\u{2032}', None),
    ("primes;", '\u{2119}', None),
    ("prnE;", '\u{2AB5}', None),
    ("prnap;", '\u{2AB9}', None),
    ("prnsim;", '\u{22E8}', None),
    ("prod;", '\u{220F}', None),
    ("profalar;", '\u{232E}', None),
    ("profline;", '\u{2312}', None),
    ("profsurf;", '\u{2313}', None),
    ("prop;", '\u{221D}', None),
    ("propto;", '\u{221D}', None),
    ("prsim;", '\u{227E}', None),
    ("prurel;", '\u{22B0}', None),
    ("pscr;", '\u{1D4C5}', None),
    ("psi;", '\u{3C8}', None),
    ("puncsp;", '\u{2008}', None),
    ("qfr;", '\u{1D52E}', None),
    ("qint;", '\u{2A0C}', None),
    ("qopf;", '\u{1D562}', None),
    ("qprime;", '\u{2057}', None),
    ("qscr;", '\u{1D4C6}', None),
    ("quaternions;", '\u{210D}', None),
    ("quatint;", '\u{2A16}', None),
    ("quest;", '\u{3F}', None),
    ("questeq;", '\u{225F}', None),
    ("quot", '\u{22}', None),
    ("quot;", '\u{22}', None),
    ("rAarr;", '\u{21DB}', None),
    ("rArr;", '\u{21D2}', None),
    ("rAtail;", '\u{291C}', None),
    ("rBarr;", '\u{290F}', None),
    ("rHar;", '\u{2964}', None),
    ("race;", '\u{223D}', Some('\u{331}')),
    ("racute;", '\u{155}', None),
    ("radic;", '\u{221A}', None),
    ("raemptyv;", '\u{29B3}', None),
    ("rang;", '\u{27E9}', None),
    ("rangd;", '\u{2992}', None),
    ("range;", '\u{29A5}', None),
    ("rangle;", '\u{27E9}', None),
    ("raquo", '\u{BB}', None),
    ("raquo;", '\u{BB}', None),
    ("rarr;", '\u{2192}', None),
    ("rarrap;", '\u{2975}', None),
    ("rarrb;", '\u{21E5}', None),
    ("rarrbfs;", '\u{2920}', None),
    ("rarrc;", '\u{2933}', None),
    ("rarrfs;", '\u{291E}', None),
    ("rarrhk;", '\u{21AA}', None),
    ("rarrlp;", '\u{21AC}', None),
    ("rarrpl;", '\u{2945}', None),
    ("rarrsim;", '\u{2974}', None),
    ("rarrtl;", '\u{21A3}', None),
    ("rarrw;", '\u{219D}', None),
    ("ratail;", '\u{291A}', None),
    ("ratio;", '\u{2236}', None),
    ("rationals;", '\u{211A}', None),
    ("rbarr;", '\u{290D}', None),
    ("rbbrk;", '\u{2773}', None),
    ("rbrace;", '\u{7D}', None),
    ("rbrack;", '\u{5D}', None),
    ("rbrke;", '\u{298C}', None),
    ("rbrksld;", '\u{298E}', None),
    ("rbrkslu;", '\u{2990}', None),
    ("rcaron;", '\u{159}', None),
    ("rcedil;", '\u{157}', None),
    ("rceil;", '\u{2309}', None),
    ("rcub;", '\u{7D}', None),
    ("rcy;", '\u{440}', None),
    ("rdca;", '\u{2937}', None),
    ("rdldhar;", '\u{2969}', None),
    ("rdquo;", '\u{201D}', None),
    ("rdquor;", '\u{201D}', None),
    ("rdsh;", '\u{21B3}', None),
    ("real;", '\u{211C}', None),
    ("realine;", '\u{211B}', None),
    ("realpart;", '\u{211C}', None),
    ("reals;", '\u{211D}', None),
    ("rect;", '\u{25AD}', None),
    ("reg", '\u{AE}', None),
    ("reg;", '\u{AE}', None),
    ("rfisht;", '\u{297D}', None),
    ("rfloor;", '\u{230B}', None),
    ("rfr;", '\u{1D52F}', None),
    ("rhard;", '\u{21C1}', None),
    ("rharu;", '\u{21C0}', None),
    ("rharul;", '\u{296C}', None),
    ("rho;", '\u{3C1}', None),
    ("rhov;", '\u{3F1}', None),
    ("rightarrow;", '\u{2192}', None),
    ("rightarrowtail;", '\u{21A3}', None),
    ("rightharpoondown;", '\u{21C1}', None),
    ("rightharpoonup;", '\u{21C0}', None),
    ("rightleftarrows;", '\u{21C4}', None),
    ("rightleftharpoons;", '\u{21CC}', None),
    ("rightrightarrows;", '\u{21C9}', None),
    ("rightsquigarrow;", '\u{219D}', None),
    ("rightthreetimes;", '\u{22CC}', None),
    ("ring;", '\u{2DA}', None),
    ("risingdotseq;", '\u{2253}', None),
    ("rlarr;", '\u{21C4}', None),
    ("rlhar;", '\u{21CC}', None),
    ("rlm;", '\u{200F}', None),
    ("rmoust;", '\u{23B1}', None),
    ("rmoustache;", '\u{23B1}', None),
    ("rnmid;", '\u{2AEE}', None),
    ("roang;", '\u{27ED}', None),
    ("roarr;", '\u{21FE}', None),
    ("robrk;", '\u{27E7}', None),
    ("ropar;", '\u{2986}', None),
    ("ropf;", '\u{1D563}', None),
    ("roplus;", '\u{2A2E}', None),
    ("rotimes;", '\u{2A35}', None),
    ("rpar;", '\u{29}', None),
    ("rpargt;", '\u{2994}', None),
    ("rppolint;", '\u{2A12}', None),
    ("rrarr;", '\u{21C9}', None),
    ("rsaquo;", '\u{203A}', None),
    ("rscr;", '\u{1D4C7}', None),
    ("rsh;", '\u{21B1}', None),
    ("rsqb;", '\u{5D}', None),
    ("rsquo;", '\u{2019}', None),
    ("rsquor;", '\u{2019}', None),
    ("rthree;", '\u{22CC}', None),
    ("rtimes;", '\u{22CA}', None),
    ("rtri;", '\u{25B9}', None),
    ("rtrie;", '\u{22B5}', None),
    ("rtrif;", '\u{25B8}', None),
    ("rtriltri;", '\u{29CE}', None),
    ("ruluhar;", '\u{2968}', None),
    ("rx;", '\u{211E}', None),
    ("sacute;", '\u{15B}', None),
    ("sbquo;", '\u{201A}', None),
    ("sc;", '\u{227B}', None),
    ("scE;", '\u{2AB4}', None),
    ("scap;", '\u{2AB8}', None),
    ("scaron;", '\u{161}', None),
    ("sccue;", '\u{227D}', None),
    ("sce;", '\u{2AB0}', None),
    ("scedil;", '\u{15F}', None),
    ("scirc;", '\u{15D}', None),
    ("scnE;", '\u{2AB6}', None),
    ("scnap;", '\u{2ABA}', None),
    ("scnsim;", '\u{22E9}', None),
    ("scpolint;", '\u{2A13}', None),
    ("scsim;", '\u{227F}', None),
    ("scy;", '\u{441}', None),
    ("sdot;", '\u{22C5}', None),
    ("sdotb;", '\u{22A1}', None),
    ("sdote;", '\u{2A66}', None),
    ("seArr;", '\u{21D8}', None),
    ("searhk;", '\u{2925}', None),
    ("searr;", '\u{2198}', None),
    ("searrow;", '\u{2198}', None),
    ("sect", '\u{A7}', None),
    ("sect;", '\u{A7}', None),
    ("semi;", '\u{3B}', None),
    ("seswar;", '\u{2929}', None),
    ("setminus;", '\u{2216}', None),
    ("setmn;", '\u{2216}', None),
    ("sext;", '\u{2736}', None),
    ("sfr;", '\u{1D530}', None),
    ("sfrown;", '\u{2322}', None),
    ("sharp;", '\u{266F}', None),
    ("shchcy;", '\u{449}', None),
    ("shcy;", '\u{448}', None),
    ("shortmid;", '\u{2223}', None),
    ("shortparallel;", '\u{2225}', None),
    ("shy", '\u{AD}', None),
    ("shy;", '\u{AD}', None),
    ("sigma;", '\u{3C3}', None),
    ("sigmaf;", '\u{3C2}', None),
    ("sigmav;", '\u{3C2}', None),
    ("sim;", '\u{223C}', None),
    ("simdot;", '\u{2A6A}', None),
    ("sime;", '\u{2243}', None),
    ("simeq;", '\u{2243}', None),
    ("simg;", '\u{2A9E}', None),
    ("simgE;", '\u{2AA0}', None),
    ("siml;", '\u{2A9D}', None),
    ("simlE;", '\u{2A9F}', None),
    ("simne;", '\u{2246}', None),
    ("simplus;", '\u{2A24}', None),
    ("simrarr;", '\u{2972}', None),
    ("slarr;", '\u{2190}', None),
    ("smallsetminus;", '\u{2216}', None),
    ("smashp;", '\u{2A33}', None),
    ("smeparsl;", '\u{29E4}', None),
    ("smid;", '\u{2223}', None),
    ("smile;", '\u{2323}', None),
    ("smt;", '\u{2AAA}', None),
    ("smte;", '\u{2AAC}', None),
    ("smtes;", '\u{2AAC}', Some('\u{FE00}')),
    ("softcy;", '\u{44C}', None),
    ("sol;", '\u{2F}', None),
    ("solb;", '\u{29C4}', None),
    ("solbar;", '\u{233F}', None),
    ("sopf;", '\u{1D564}', None),
    ("spades;", '\u{2660}', None),
    ("spadesuit;", '\u{2660}', None),
    ("spar;", '\u{2225}', None),
    ("sqcap;", '\u{2293}', None),
    ("sqcaps;", '\u{2293}', Some('\u{FE00}')),
    ("sqcup;", '\u{2294}', None),
    ("sqcups;", '\u{2294}', Some('\u{FE00}')),
    ("sqsub;", '\u{228F}', None),
    ("sqsube;", '\u{2291}', None),
    ("sqsubset;", '\u{228F}', None),
    ("sqsubseteq;", '\u{2291}', None),
    ("sqsup;", '\u{2290}', None),
    ("sqsupe;", '\u{2292}', None),
    ("sqsupset;", '\u{2290}', None),
    ("sqsupseteq;", '\u{2292}', None),
    ("squ;", '\u{25A1}', None),
    ("square;", '\u{25A1}', None),
    ("squarf;", '\u{25AA}', None),
    ("squf;", '\u{25AA}', None),
    ("srarr;", '\u{2192}', None),
    ("sscr;", '\u{1D4C8}', None),
    ("ssetmn;", '\u{2216}', None),
    ("ssmile;", '\u{2323}', None),
    ("sstarf;", '\u{22C6}', None),
    ("star;", '\u{2606}', None),
    ("starf;", '\u{2605}', None),
    ("straightepsilon;", '\u{3F5}', None),
    ("straightphi;", '\u{3D5}', None),
    ("strns;", '\u{AF}', None),
    ("sub;", '\u{2282}', None),
    ("subE;", '\u{2AC5}', None),
    ("subdot;", '\u{2ABD}', None),
    ("sube;", '\u{2286}', None),
    ("subedot;", '\u{2AC3}', None),
    ("submult;", '\u{2AC1}', None),
    ("subnE;", '\u{2ACB}', None),
    ("subne;", '\u{228A}', None),
    ("subplus;", '\u{2ABF}', None),
    ("subrarr;", '\u{2979}', None),
    ("subset;", '\u{2282}', None),
    ("subseteq;", '\u{2286}', None),
    ("subseteqq;", '\u{2AC5}', None),
    ("subsetneq;", '\u{228A}', None),
    ("subsetneqq;", '\u{2ACB}', None),
    ("subsim;", '\u{2AC7}', None),
    ("subsub;", '\u{2AD5}', None),
    ("subsup;", '\u{2AD3}', None),
    ("succ;", '\u{227B}', None),
    ("succapprox;", '\u{2AB8}', None),
    ("succcurlyeq;", '\u{227D}', None),
    ("succeq;", '\u{2AB0}', None),
    ("succnapprox;", '\u{2ABA}', None),
    ("succneqq;", '\u{2AB6}', None),
    ("succnsim;", '\u{22E9}', None),
    ("succsim;", '\u{227F}', None),
    ("sum;", '\u{2211}', None),
    ("sung;", '\u{266A}', None),
    ("sup1", '\u{B9}', None),
    ("sup1;", '\u{B9}', None),
    ("sup2", '\u{B2}', None),
    ("sup2;", '\u{B2}', None),
    ("sup3", '\u{B3}', None),
    ("sup3;", '\u{B3}', None),
    ("sup;", '\u{2283}', None),
    ("supE;", '\u{2AC6}', None),
    ("supdot;", '\u{2ABE}', None),
    ("supdsub;", '\u{2AD8}', None),
    ("supe;", '\u{2287}', None),
    ("supedot;", '\u{2AC4}', None),
    ("suphsol;", '\u{27C9}', None),
    ("suphsub;", '\u{2AD7}', None),
    ("suplarr;", '\u{297B}', None),
    ("supmult;", '\u{2AC2}', None),
    ("supnE;", '\u{2ACC}', None),
    ("supne;", '\u{228B}', None),
    ("supplus;", '\u{2AC0}', None),
    ("supset;", '\u{2283}', None),
    ("supseteq;", '\u{2287}', None),
    ("supseteqq;", '\u{2AC6}', None),
    ("supsetneq;", '\u{228B}', None),
    ("supsetneqq;", '\u{2ACC}', None),
    ("supsim;", '\u{2AC8}', None),
    ("supsub;", '\u{2AD4}', None),
    ("supsup;", '\u{2AD6}', None),
    ("swArr;", '\u{21D9}', None),
    ("swarhk;", '\u{2926}', None),
    ("swarr;", '\u{2199}', None),
    ("swarrow;", '\u{2199}', None),
    ("swnwar;", '\u{292A}', None),
    ("szlig", '\u{DF}', None),
    ("szlig;", '\u{DF}', None),
    ("target;", '\u{2316}', None),
    ("tau;", '\u{3C4}', None),
    ("tbrk;", '\u{23B4}', None),
    ("tcaron;", '\u{165}', None),
    ("tcedil;", '\u{163}', None),
    ("tcy;", '\u{442}', None),
    ("tdot;", '\u{20DB}', None),
    ("telrec;", '\u{2315}', None),
    ("tfr;", '\u{1D531}', None),
    ("there4;", '\u{2234}', None),
    ("therefore;", '\u{2234}', None),
    ("theta;", '\u{3B8}', None),
    ("thetasym;", '\u{3D1}', None),
    ("thetav;", '\u{3D1}', None),
    ("thickapprox;", '\u{2248}', None),
    ("thicksim;", '\u{223C}', None),
    ("thinsp;", '\u{2009}', None),
    ("thkap;", '\u{2248}', None),
    ("thksim;", '\u{223C}', None),
    ("thorn", '\u{FE}', None),
    ("thorn;", '\u{FE}', None),
    ("tilde;", '\u{2DC}', None),
    ("times", '\u{D7}', None),
    ("times;", '\u{D7}', None),
    ("timesb;", '\u{22A0}', None),
    ("timesbar;", '\u{2A31}', None),
    ("timesd;", '\u{2A30}', None),
    ("tint;", '\u{222D}', None),
    ("toea;", '\u{2928}', None),
    ("top;", '\u{22A4}', None),
    ("topbot;", '\u{2336}', None),
    ("topcir;", '\u{2AF1}', None),
    ("topf;", '\u{1D565}', None),
    ("topfork;", '\u{2ADA}', None),
    ("tosa;", '\u{2929}', None),
    ("tprime;", '\u{2034}', None),
    ("trade;", '\u{2122}', None),
    ("triangle;", '\u{25B5}', None),
    ("triangledown;", '\u{25BF}', None),
    ("triangleleft;", '\u{25C3}', None),
    ("trianglelefteq;", '\u{22B4}', None),
    ("triangleq;", '\u{225C}', None),
    ("triangleright;", '\u{25B9}', None),
    ("trianglerighteq;", '\u{22B5}', None),
    ("tridot;", '\u{25EC}', None),
    ("trie;", '\u{225C}', None),
    ("triminus;", '\u{2A3A}', None),
    ("triplus;", '\u{2A39}', None),
    ("trisb;", '\u{29CD}', None),
    ("tritime;", '\u{2A3B}', None),
    ("trpezium;", '\u{23E2}', None),
    ("tscr;", '\u{1D4C9}', None),
    ("tscy;", '\u{446}', None),
    ("tshcy;", '\u{45B}', None),
    ("tstrok;", '\u{167}', None),
    ("twixt;", '\u{226C}', None),
    ("twoheadleftarrow;", '\u{219E}', None),
    ("twoheadrightarrow;", '\u{21A0}', None),
    ("uArr;", '\u{21D1}', None),
    ("uHar;", '\u{2963}', None),
    ("uacute", '\u{FA}', None),
    ("uacute;", '\u{FA}', None),
    ("uarr;", '\u{2191}', None),
    ("ubrcy;", '\u{45E}', None),
    ("ubreve;", '\u{16D}', None),
    ("ucirc", '\u{FB}', None),
    ("ucirc;", '\u{FB}', None),
    ("ucy;", '\u{443}', None),
    ("udarr;", '\u{21C5}', None),
    ("udblac;", '\u{171}', None),
    ("udhar;", '\u{296E}', None),
    ("ufisht;", '\u{297E}', None),
    ("ufr;", '\u{1D532}', None),
    ("ugrave", '\u{F9}', None),
    ("ugrave;", '\u{F9}', None),
    ("uharl;", '\u{21BF}', None),
    ("uharr;", '\u{21BE}', None),
    ("uhblk;", '\u{2580}', None),
    ("ulcorn;", '\u{231C}', None),
    ("ulcorner;", '\u{231C}', None),
    ("ulcrop;", '\u{230F}', None),
    ("ultri;", '\u{25F8}', None),
    ("umacr;", '\u{16B}', None),
    ("uml", '\u{A8}', None),
    ("uml;", '\u{A8}', None),
    ("uogon;", '\u{173}', None),
    ("uopf;", '\u{1D566}', None),
    ("uparrow;", '\u{2191}', None),
    ("updownarrow;", '\u{2195}', None),
    ("upharpoonleft;", '\u{21BF}', None),
    ("upharpoonright;", '\u{21BE}', None),
    ("uplus;", '\u{228E}', None),
    ("upsi;", '\u{3C5}', None),
    ("upsih;", '\u{3D2}', None),
    ("upsilon;", '\u{3C5}', None),
    ("upuparrows;", '\u{21C8}', None),
    ("urcorn;", '\u{231D}', None),
    ("urcorner;", '\u{231D}', None),
    ("urcrop;", '\u{230E}', None),
    ("uring;", '\u{16F}', None),
    ("urtri;", '\u{25F9}', None),
    ("uscr;", '\u{1D4CA}', None),
    ("utdot;", '\u{22F0}', None),
    ("utilde;", '\u{169}', None),
    ("utri;", '\u{25B5}', None),
    ("utrif;", '\u{25B4}', None),
    ("uuarr;", '\u{21C8}', None),
    ("uuml", '\u{FC}', None),
    ("uuml;", '\u{FC}', None),
    ("uwangle;", '\u{29A7}', None),
    ("vArr;", '\u{21D5}', None),
    ("vBar;", '\u{2AE8}', None),
    ("vBarv;", '\u{2AE9}', None),
    ("vDash;", '\u{22A8}', None),
    ("vangrt;", '\u{299C}', None),
    ("varepsilon;", '\u{3F5}', None),
    ("varkappa;", '\u{3F0}', None),
    ("varnothing;", '\u{2205}', None),
    ("varphi;", '\u{3D5}', None),
    ("varpi;", '\u{3D6}', None),
    ("varpropto;", '\u{221D}', None),
    ("varr;", '\u{2195}', None),
    ("varrho;", '\u{3F1}', None),
    ("varsigma;", '\u{3C2}', None),
    ("varsubsetneq;", '\u{228A}', Some('\u{FE00}')),
    ("varsubsetneqq;", '\u{2ACB}', Some('\u{FE00}')),
    ("varsupsetneq;", '\u{228B}', Some('\u{FE00}')),
    ("varsupsetneqq;", '\u{2ACC}', Some('\u{FE00}')),
    ("vartheta;", '\u{3D1}', None),
    ("vartriangleleft;", '\u{22B2}', None),
    ("vartriangleright;", '\u{22B3}', None),
    ("vcy;", '\u{432}', None),
    ("vdash;", '\u{22A2}', None),
    ("vee;", '\u{2228}', None),
    ("veebar;", '\u{22BB}', None),
    ("veeeq;", '\u{225A}', None),
    ("vellip;", '\u{22EE}', None),
    ("verbar;", '\u{7C}', None),
    ("vert;", '\u{7C}', None),
    ("vfr;", '\u{1D533}', None),
    ("vltri;", '\u{22B2}', None),
    ("vnsub;", '\u{2282}', Some('\u{20D2}')),
    ("vnsup;", '\u{2283}', Some('\u{20D2}')),
    ("vopf;", '\u{1D567}', None),
    ("vprop;", '\u{221D}', None),
    ("vrtri;", '\u{22B3}', None),
    ("vscr;", '\u{1D4CB}', None),
    ("vsubnE;", '\u{2ACB}', Some('\u{FE00}')),
    ("vsubne;", '\u{228A}', Some('\u{FE00}')),
    ("vsupnE;", '\u{2ACC}', Some('\u{FE00}')),
    ("vsupne;", '\u{228B}', Some('\u{FE00}')),
    ("vzigzag;", '\u{299A}', None),
    ("wcirc;", '\u{175}', None),
    ("wedbar;", '\u{2A5F}', None),
    ("wedge;", '\u{2227}', None),
    ("wedgeq;", '\u{2259}', None),
    ("weierp;", '\u{2118}', None),
    ("wfr;", '\u{1D534}', None),
    ("wopf;", '\u{1D568}', None),
    ("wp;", '\u{2118}', None),
    ("wr;", '\u{2240}', None),
    ("wreath;", '\u{2240}', None),
    ("wscr;", '\u{1D4CC}', None),
    ("xcap;", '\u{22C2}', None),
    ("xcirc;", '\u{25EF}', None),
    ("xcup;", '\u{22C3}', None),
    ("xdtri;", '\u{25BD}', None),
    ("xfr;", '\u{1D535}', None),
    ("xhArr;", '\u{27FA}', None),
    ("xharr;", '\u{27F7}', None),
    ("xi;", '\u{3BE}', None),
    ("xlArr;", '\u{27F8}', None),
    ("xlarr;", '\u{27F5}', None),
    ("xmap;", '\u{27FC}', None),
    ("xnis;", '\u{22FB}', None),
    ("xodot;", '\u{2A00}', None),
    ("xopf;", '\u{1D569}', None),
    ("xoplus;", '\u{2A01}', None),
    ("xotime;", '\u{2A02}', None),
    ("xrArr;", '\u{27F9}', None),
    ("xrarr;", '\u{27F6}', None),
    ("xscr;", '\u{1D4CD}', None),
    ("xsqcup;", '\u{2A06}', None),
    ("xuplus;", '\u{2A04}', None),
    ("xutri;", '\u{25B3}', None),
    ("xvee;", '\u{22C1}', None),
    ("xwedge;", '\u{22C0}', None),
    ("yacute", '\u{FD}', None),
    ("yacute;", '\u{FD}', None),
    ("yacy;", '\u{44F}', None),
    ("ycirc;", '\u{177}', None),
    ("ycy;", '\u{44B}', None),
    ("yen", '\u{A5}', None),
    ("yen;", '\u{A5}', None),
    ("yfr;", '\u{1D536}', None),
    ("yicy;", '\u{457}', None),
    ("yopf;", '\u{1D56A}', None),
    ("yscr;", '\u{1D4CE}', None),
    ("yucy;", '\u{44E}', None),
    ("yuml", '\u{FF}', None),
    ("yuml;", '\u{FF}', None),
    ("zacute;", '\u{17A}', None),
    ("zcaron;", '\u{17E}', None),
    ("zcy;", '\u{437}', None),
    ("zdot;", '\u{17C}', None),
    ("zeetrf;", '\u{2128}', None),
    ("zeta;", '\u{3B6}', None),
    ("zfr;", '\u{1D537}', None),
    ("zhcy;", '\u{436}', None),
    ("zigrarr;", '\u{21DD}', None),
    ("zopf;", '\u{1D56B}', None),
    ("zscr;", '\u{1D4CF}', None),
    ("zwj;", '\u{200D}', None),
    ("zwnj;", '\u{200C}', None),
];

/// Numeric references in `0x80..=0x9F` name Windows-1252 bytes, not C1 controls.
pub(crate) static C1_REMAP: [u16; 32] = [
    0x20AC, 0x0081, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021,
    0x02C6, 0x2030, 0x0160, 0x2039, 0x0152, 0x008D, 0x017D, 0x008F,
    0x0090, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
    0x02DC, 0x2122, 0x0161, 0x203A, 0x0153, 0x009D, 0x017E, 0x0178,
];
