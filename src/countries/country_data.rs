// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::Country;

/// Built-in country table in display order.
///
/// The order is load-bearing: when a dial code is shared and no preferred
/// country is supplied, the first row wins.
pub(super) static COUNTRIES: &[Country] = &[
    Country::new("AF", "Afghanistan", "93"),
    Country::new("AX", "Åland Islands", "35818"),
    Country::new("AL", "Albania", "355"),
    Country::new("DZ", "Algeria", "213"),
    Country::new("AS", "American Samoa", "1684"),
    Country::new("AD", "Andorra", "376"),
    Country::new("AO", "Angola", "244"),
    Country::new("AI", "Anguilla", "1264"),
    Country::new("AG", "Antigua and Barbuda", "1268"),
    Country::new("AR", "Argentina", "54"),
    Country::new("AM", "Armenia", "374"),
    Country::new("AW", "Aruba", "297"),
    Country::new("AU", "Australia", "61"),
    Country::new("AT", "Austria", "43"),
    Country::new("AZ", "Azerbaijan", "994"),
    Country::new("BS", "Bahamas", "1242"),
    Country::new("BH", "Bahrain", "973"),
    Country::new("BD", "Bangladesh", "880"),
    Country::new("BB", "Barbados", "1246"),
    Country::new("BY", "Belarus", "375"),
    Country::new("BE", "Belgium", "32"),
    Country::new("BZ", "Belize", "501"),
    Country::new("BJ", "Benin", "229"),
    Country::new("BM", "Bermuda", "1441"),
    Country::new("BT", "Bhutan", "975"),
    Country::new("BO", "Bolivia", "591"),
    Country::new("BA", "Bosnia and Herzegovina", "387"),
    Country::new("BW", "Botswana", "267"),
    Country::new("BR", "Brazil", "55"),
    Country::new("IO", "British Indian Ocean Territory", "246"),
    Country::new("VG", "British Virgin Islands", "1284"),
    Country::new("BN", "Brunei", "673"),
    Country::new("BG", "Bulgaria", "359"),
    Country::new("BF", "Burkina Faso", "226"),
    Country::new("BI", "Burundi", "257"),
    Country::new("KH", "Cambodia", "855"),
    Country::new("CM", "Cameroon", "237"),
    Country::new("CA", "Canada", "1"),
    Country::new("CV", "Cape Verde", "238"),
    Country::new("BQ", "Caribbean Netherlands", "599"),
    Country::new("KY", "Cayman Islands", "1345"),
    Country::new("CF", "Central African Republic", "236"),
    Country::new("TD", "Chad", "235"),
    Country::new("CL", "Chile", "56"),
    Country::new("CN", "China", "86"),
    Country::new("CX", "Christmas Island", "61"),
    Country::new("CC", "Cocos (Keeling) Islands", "61"),
    Country::new("CO", "Colombia", "57"),
    Country::new("KM", "Comoros", "269"),
    Country::new("CG", "Congo", "242"),
    Country::new("CD", "Congo (DRC)", "243"),
    Country::new("CK", "Cook Islands", "682"),
    Country::new("CR", "Costa Rica", "506"),
    Country::new("CI", "Côte d'Ivoire", "225"),
    Country::new("HR", "Croatia", "385"),
    Country::new("CU", "Cuba", "53"),
    Country::new("CW", "Curaçao", "599"),
    Country::new("CY", "Cyprus", "357"),
    Country::new("CZ", "Czechia", "420"),
    Country::new("DK", "Denmark", "45"),
    Country::new("DJ", "Djibouti", "253"),
    Country::new("DM", "Dominica", "1767"),
    Country::new("DO", "Dominican Republic", "1809"),
    Country::new("EC", "Ecuador", "593"),
    Country::new("EG", "Egypt", "20"),
    Country::new("SV", "El Salvador", "503"),
    Country::new("GQ", "Equatorial Guinea", "240"),
    Country::new("ER", "Eritrea", "291"),
    Country::new("EE", "Estonia", "372"),
    Country::new("SZ", "Eswatini", "268"),
    Country::new("ET", "Ethiopia", "251"),
    Country::new("FK", "Falkland Islands", "500"),
    Country::new("FO", "Faroe Islands", "298"),
    Country::new("FJ", "Fiji", "679"),
    Country::new("FI", "Finland", "358"),
    Country::new("FR", "France", "33"),
    Country::new("GF", "French Guiana", "594"),
    Country::new("PF", "French Polynesia", "689"),
    Country::new("GA", "Gabon", "241"),
    Country::new("GM", "Gambia", "220"),
    Country::new("GE", "Georgia", "995"),
    Country::new("DE", "Germany", "49"),
    Country::new("GH", "Ghana", "233"),
    Country::new("GI", "Gibraltar", "350"),
    Country::new("GR", "Greece", "30"),
    Country::new("GL", "Greenland", "299"),
    Country::new("GD", "Grenada", "1473"),
    Country::new("GP", "Guadeloupe", "590"),
    Country::new("GU", "Guam", "1671"),
    Country::new("GT", "Guatemala", "502"),
    Country::new("GG", "Guernsey", "441481"),
    Country::new("GN", "Guinea", "224"),
    Country::new("GW", "Guinea-Bissau", "245"),
    Country::new("GY", "Guyana", "592"),
    Country::new("HT", "Haiti", "509"),
    Country::new("HN", "Honduras", "504"),
    Country::new("HK", "Hong Kong", "852"),
    Country::new("HU", "Hungary", "36"),
    Country::new("IS", "Iceland", "354"),
    Country::new("IN", "India", "91"),
    Country::new("ID", "Indonesia", "62"),
    Country::new("IR", "Iran", "98"),
    Country::new("IQ", "Iraq", "964"),
    Country::new("IE", "Ireland", "353"),
    Country::new("IM", "Isle of Man", "441624"),
    Country::new("IL", "Israel", "972"),
    Country::new("IT", "Italy", "39"),
    Country::new("JM", "Jamaica", "1876"),
    Country::new("JP", "Japan", "81"),
    Country::new("JE", "Jersey", "441534"),
    Country::new("JO", "Jordan", "962"),
    Country::new("KZ", "Kazakhstan", "7"),
    Country::new("KE", "Kenya", "254"),
    Country::new("KI", "Kiribati", "686"),
    Country::new("XK", "Kosovo", "383"),
    Country::new("KW", "Kuwait", "965"),
    Country::new("KG", "Kyrgyzstan", "996"),
    Country::new("LA", "Laos", "856"),
    Country::new("LV", "Latvia", "371"),
    Country::new("LB", "Lebanon", "961"),
    Country::new("LS", "Lesotho", "266"),
    Country::new("LR", "Liberia", "231"),
    Country::new("LY", "Libya", "218"),
    Country::new("LI", "Liechtenstein", "423"),
    Country::new("LT", "Lithuania", "370"),
    Country::new("LU", "Luxembourg", "352"),
    Country::new("MO", "Macau", "853"),
    Country::new("MG", "Madagascar", "261"),
    Country::new("MW", "Malawi", "265"),
    Country::new("MY", "Malaysia", "60"),
    Country::new("MV", "Maldives", "960"),
    Country::new("ML", "Mali", "223"),
    Country::new("MT", "Malta", "356"),
    Country::new("MH", "Marshall Islands", "692"),
    Country::new("MQ", "Martinique", "596"),
    Country::new("MR", "Mauritania", "222"),
    Country::new("MU", "Mauritius", "230"),
    Country::new("YT", "Mayotte", "262"),
    Country::new("MX", "Mexico", "52"),
    Country::new("FM", "Micronesia", "691"),
    Country::new("MD", "Moldova", "373"),
    Country::new("MC", "Monaco", "377"),
    Country::new("MN", "Mongolia", "976"),
    Country::new("ME", "Montenegro", "382"),
    Country::new("MS", "Montserrat", "1664"),
    Country::new("MA", "Morocco", "212"),
    Country::new("MZ", "Mozambique", "258"),
    Country::new("MM", "Myanmar", "95"),
    Country::new("NA", "Namibia", "264"),
    Country::new("NR", "Nauru", "674"),
    Country::new("NP", "Nepal", "977"),
    Country::new("NL", "Netherlands", "31"),
    Country::new("NC", "New Caledonia", "687"),
    Country::new("NZ", "New Zealand", "64"),
    Country::new("NI", "Nicaragua", "505"),
    Country::new("NE", "Niger", "227"),
    Country::new("NG", "Nigeria", "234"),
    Country::new("NU", "Niue", "683"),
    Country::new("NF", "Norfolk Island", "672"),
    Country::new("KP", "North Korea", "850"),
    Country::new("MK", "North Macedonia", "389"),
    Country::new("MP", "Northern Mariana Islands", "1670"),
    Country::new("NO", "Norway", "47"),
    Country::new("OM", "Oman", "968"),
    Country::new("PK", "Pakistan", "92"),
    Country::new("PW", "Palau", "680"),
    Country::new("PS", "Palestine", "970"),
    Country::new("PA", "Panama", "507"),
    Country::new("PG", "Papua New Guinea", "675"),
    Country::new("PY", "Paraguay", "595"),
    Country::new("PE", "Peru", "51"),
    Country::new("PH", "Philippines", "63"),
    Country::new("PL", "Poland", "48"),
    Country::new("PT", "Portugal", "351"),
    Country::new("PR", "Puerto Rico", "1787"),
    Country::new("QA", "Qatar", "974"),
    Country::new("RE", "Réunion", "262"),
    Country::new("RO", "Romania", "40"),
    Country::new("RU", "Russia", "7"),
    Country::new("RW", "Rwanda", "250"),
    Country::new("BL", "Saint Barthélemy", "590"),
    Country::new("SH", "Saint Helena", "290"),
    Country::new("KN", "Saint Kitts and Nevis", "1869"),
    Country::new("LC", "Saint Lucia", "1758"),
    Country::new("MF", "Saint Martin", "590"),
    Country::new("PM", "Saint Pierre and Miquelon", "508"),
    Country::new("VC", "Saint Vincent and the Grenadines", "1784"),
    Country::new("WS", "Samoa", "685"),
    Country::new("SM", "San Marino", "378"),
    Country::new("ST", "São Tomé and Príncipe", "239"),
    Country::new("SA", "Saudi Arabia", "966"),
    Country::new("SN", "Senegal", "221"),
    Country::new("RS", "Serbia", "381"),
    Country::new("SC", "Seychelles", "248"),
    Country::new("SL", "Sierra Leone", "232"),
    Country::new("SG", "Singapore", "65"),
    Country::new("SX", "Sint Maarten", "1721"),
    Country::new("SK", "Slovakia", "421"),
    Country::new("SI", "Slovenia", "386"),
    Country::new("SB", "Solomon Islands", "677"),
    Country::new("SO", "Somalia", "252"),
    Country::new("ZA", "South Africa", "27"),
    Country::new("KR", "South Korea", "82"),
    Country::new("SS", "South Sudan", "211"),
    Country::new("ES", "Spain", "34"),
    Country::new("LK", "Sri Lanka", "94"),
    Country::new("SD", "Sudan", "249"),
    Country::new("SR", "Suriname", "597"),
    Country::new("SJ", "Svalbard and Jan Mayen", "47"),
    Country::new("SE", "Sweden", "46"),
    Country::new("CH", "Switzerland", "41"),
    Country::new("SY", "Syria", "963"),
    Country::new("TW", "Taiwan", "886"),
    Country::new("TJ", "Tajikistan", "992"),
    Country::new("TZ", "Tanzania", "255"),
    Country::new("TH", "Thailand", "66"),
    Country::new("TL", "Timor-Leste", "670"),
    Country::new("TG", "Togo", "228"),
    Country::new("TK", "Tokelau", "690"),
    Country::new("TO", "Tonga", "676"),
    Country::new("TT", "Trinidad and Tobago", "1868"),
    Country::new("TN", "Tunisia", "216"),
    Country::new("TR", "Turkey", "90"),
    Country::new("TM", "Turkmenistan", "993"),
    Country::new("TC", "Turks and Caicos Islands", "1649"),
    Country::new("TV", "Tuvalu", "688"),
    Country::new("VI", "U.S. Virgin Islands", "1340"),
    Country::new("UG", "Uganda", "256"),
    Country::new("UA", "Ukraine", "380"),
    Country::new("AE", "United Arab Emirates", "971"),
    Country::new("GB", "United Kingdom", "44"),
    Country::new("US", "United States", "1"),
    Country::new("UY", "Uruguay", "598"),
    Country::new("UZ", "Uzbekistan", "998"),
    Country::new("VU", "Vanuatu", "678"),
    Country::new("VA", "Vatican City", "39"),
    Country::new("VE", "Venezuela", "58"),
    Country::new("VN", "Vietnam", "84"),
    Country::new("WF", "Wallis and Futuna", "681"),
    Country::new("EH", "Western Sahara", "212"),
    Country::new("YE", "Yemen", "967"),
    Country::new("ZM", "Zambia", "260"),
    Country::new("ZW", "Zimbabwe", "263"),
];
