//! Compiled-in Light Rail station table.
//!
//! (id, English name, Chinese name) for every Light Rail stop, in
//! network order. The Next Train API has no endpoint for this mapping,
//! so it ships with the binary.

pub(super) const STATIONS: &[(&str, &str, &str)] = &[
    ("1", "Tuen Mun Ferry Pier", "屯門碼頭"),
    ("10", "Melody Garden", "美樂"),
    ("15", "Butterfly", "蝴蝶"),
    ("20", "Light Rail Depot", "輕鐵車廠"),
    ("30", "Lung Mun", "龍門"),
    ("40", "Tsing Shan Tsuen", "青山村"),
    ("50", "Tsing Wun", "青雲"),
    ("60", "Kin On", "建安"),
    ("70", "Ho Tin", "河田"),
    ("75", "Choy Yee Bridge", "蔡意橋"),
    ("80", "Affluence", "澤豐"),
    ("90", "Tuen Mun Hospital", "屯門醫院"),
    ("100", "Siu Hong", "兆康"),
    ("110", "Kei Lun", "麒麟"),
    ("120", "Ching Chung", "青松"),
    ("130", "Kin Sang", "建生"),
    ("140", "Tin King", "田景"),
    ("150", "Leung King", "良景"),
    ("160", "San Wai", "新圍"),
    ("170", "Shek Pai", "石排"),
    ("180", "Shan King (North)", "山景(北)"),
    ("190", "Shan King (South)", "山景(南)"),
    ("200", "Ming Kum", "鳴琴"),
    ("212", "Tai Hing (North)", "大興(北)"),
    ("220", "Tai Hing (South)", "大興(南)"),
    ("230", "Ngan Wai", "銀圍"),
    ("240", "Siu Hei", "兆禧"),
    ("250", "Tuen Mun Swimming Pool", "屯門泳池"),
    ("260", "Goodview Garden", "豐景園"),
    ("265", "Siu Lun", "兆麟"),
    ("270", "On Ting", "安定"),
    ("275", "Yau Oi", "友愛"),
    ("280", "Town Centre", "市中心"),
    ("295", "Tuen Mun", "屯門"),
    ("300", "Pui To", "杯渡"),
    ("310", "Hoh Fuk Tong", "何福堂"),
    ("320", "San Hui", "新墟"),
    ("330", "Prime View", "景峰"),
    ("340", "Fung Tei", "鳳地"),
    ("350", "Lam Tei", "藍地"),
    ("360", "Nai Wai", "泥圍"),
    ("370", "Chung Uk Tsuen", "鍾屋村"),
    ("380", "Hung Shui Kiu", "洪水橋"),
    ("390", "Tong Fong Tsuen", "塘坊村"),
    ("400", "Ping Shan", "屏山"),
    ("425", "Hang Mei Tsuen", "坑尾村"),
    ("430", "Tin Shui Wai", "天水圍"),
    ("435", "Tin Tsz", "天慈"),
    ("445", "Tin Yiu", "天耀"),
    ("448", "Locwood", "樂湖"),
    ("450", "Tin Wu", "天湖"),
    ("455", "Tin Shui", "天瑞"),
    ("460", "Chung Fu", "頌富"),
    ("468", "Tin Fu", "天富"),
    ("480", "Chestwood", "翠湖"),
    ("490", "Tin Wing", "天榮"),
    ("500", "Tin Yuet", "天悅"),
    ("510", "Tin Sau", "天秀"),
    ("520", "Wetland Park", "濕地公園"),
    ("530", "Tin Heng", "天恒"),
    ("540", "Tin Yat", "天逸"),
    ("550", "Shui Pin Wai", "水邊圍"),
    ("560", "Fung Nin Road", "豐年路"),
    ("570", "Hong Lok Road", "康樂路"),
    ("580", "Tai Tong Road", "大棠路"),
    ("600", "Yuen Long", "元朗"),
    ("920", "Sam Shing", "三聖"),
];
