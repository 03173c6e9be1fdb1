use crate::Term;

/// Localized text for the four minor-arcana suits, keyed by catalog suit.
pub const SUITS: &[(&str, &str)] = &[
    ("wands", "Değnekler"),
    ("cups", "Kupalar"),
    ("swords", "Kılıçlar"),
    ("pentacles", "Pentagramlar"),
];

/// Localized text for every card of the standard 78-card deck, keyed by the
/// catalog's canonical English name.
pub const TERMS: &[Term] = &[
    // Major arcana
    Term {
        name: "The Fool",
        localized_name: "Deli",
        meaning_up: "masumiyet, yeni başlangıçlar, özgür ruh, spontanlık, macera, cesaret",
        meaning_rev: "düşüncesizlik, aldanma, dikkatsizlik, aşırı risk alma, naiflik",
        desc: "Deli kartı yeni başlangıçları, geleceğe olan inancı ve evrenin gücüne olan güveni temsil eder. Hayatınızda yeni bir sayfa açma zamanının geldiğini gösterir.",
    },
    Term {
        name: "The Magician",
        localized_name: "Büyücü",
        meaning_up: "irade gücü, arzu, yaratım, tezahür, beceri, güç, odaklanma",
        meaning_rev: "aldatma, illüzyon, gerçeklikten kopma, manipülasyon, güç kaybı",
        desc: "Büyücü kartı tezahür, beceriklilik ve hedeflerinize ulaşmak için evrenin gücünden yararlanma yeteneğinizi gösterir.",
    },
    Term {
        name: "The High Priestess",
        localized_name: "Yüksek Rahibe",
        meaning_up: "sezgi, bilinçaltı, iç ses, gizli bilgi, kadınsı enerji, mistisizm",
        meaning_rev: "merkez kaybı, kayıp iç ses, bastırılmış duygular, sezgi eksikliği",
        desc: "Yüksek Rahibe sezgiyi, kutsal bilgiyi ve görünen ile görünmeyen alemler arasındaki bağlantıyı temsil eder.",
    },
    Term {
        name: "The Empress",
        localized_name: "İmparatoriçe",
        meaning_up: "annelik, bereket, doğa, yaratıcılık, bolluk, besleyicilik",
        meaning_rev: "bağımlılık, boğuculuk, boşluk, kısırlık, yaratıcılık eksikliği",
        desc: "İmparatoriçe anneliği, bereketi, doğayı ve besleyici enerjiyi temsil eder.",
    },
    Term {
        name: "The Emperor",
        localized_name: "İmparator",
        meaning_up: "otorite, yapı, kontrol, babalık, liderlik, düzen, kararlılık",
        meaning_rev: "zorbalık, katılık, soğukluk, otoriter davranış, kontrol kaybı",
        desc: "İmparator otoriteyi, yapıyı, kontrolü ve babalığı temsil eder.",
    },
    Term {
        name: "The Hierophant",
        localized_name: "Aziz",
        meaning_up: "gelenek, uyum, ahlak, etik, ruhani rehberlik, öğretim",
        meaning_rev: "isyan, yıkıcılık, yeni yaklaşımlar, geleneklere karşı çıkma",
        desc: "Aziz geleneği, uyumu, ahlakı ve etiği temsil eder.",
    },
    Term {
        name: "The Lovers",
        localized_name: "Aşıklar",
        meaning_up: "aşk, birlik, ilişkiler, değer uyumu, seçim yapma, uyum",
        meaning_rev: "uyumsuzluk, dengesizlik, değer çatışması, ilişki sorunları",
        desc: "Aşıklar aşkı, birliği, ilişkileri ve değer uyumunu temsil eder.",
    },
    Term {
        name: "The Chariot",
        localized_name: "Savaş Arabası",
        meaning_up: "kontrol, irade gücü, başarı, kararlılık, zafer, ilerleme",
        meaning_rev: "kontrol kaybı, yön kaybı, saldırganlık, başarısızlık",
        desc: "Savaş Arabası kontrolü, irade gücünü, başarıyı ve kararlılığı temsil eder.",
    },
    Term {
        name: "Strength",
        localized_name: "Güç",
        meaning_up: "iç güç, cesaret, merhamet, odaklanma, sabır, dayanıklılık",
        meaning_rev: "kendinden şüphe, zayıflık, güvensizlik, sabırsızlık",
        desc: "Güç kartı iç gücü, cesareti, merhemeti ve odaklanmayı temsil eder.",
    },
    Term {
        name: "The Hermit",
        localized_name: "Ermiş",
        meaning_up: "ruh arayışı, iç gözlem, iç rehberlik, bilgelik, yalnızlık",
        meaning_rev: "izolasyon, yalnızlık, geri çekilme, rehberlik reddi",
        desc: "Ermiş ruh arayışını, iç gözlemi ve iç rehberliği temsil eder.",
    },
    Term {
        name: "Wheel of Fortune",
        localized_name: "Kader Çarkı",
        meaning_up: "şans, karma, yaşam döngüleri, kader, değişim, fırsat",
        meaning_rev: "şanssızlık, kontrol kaybı, kontrole tutunma, kötü karma",
        desc: "Kader Çarkı şansı, karmayı, yaşam döngülerini ve kaderi temsil eder.",
    },
    Term {
        name: "Justice",
        localized_name: "Adalet",
        meaning_up: "adalet, eşitlik, gerçek, sebep ve sonuç, denge, doğruluk",
        meaning_rev: "adaletsizlik, sorumluluk eksikliği, dürüstsüzlük, dengesizlik",
        desc: "Adalet kartı adaleti, eşitliği, gerçeği ve sebep-sonuç ilişkisini temsil eder.",
    },
    Term {
        name: "The Hanged Man",
        localized_name: "Asılan Adam",
        meaning_up: "bekleme, teslim olma, farklı bakış açısı, fedakarlık, sabır",
        meaning_rev: "gecikme, direnç, kaçırılan fırsatlar, sabırsızlık",
        desc: "Asılan Adam beklemeyı, teslim olmayı ve farklı perspektiflerden bakmayı temsil eder.",
    },
    Term {
        name: "Death",
        localized_name: "Ölüm",
        meaning_up: "dönüşüm, geçiş, değişim, yeniden doğuş, son, başlangıç",
        meaning_rev: "değişime direnç, durgunluk, geçişten kaçınma, korku",
        desc: "Ölüm kartı dönüşümü, değişimi ve yeni başlangıçları temsil eder.",
    },
    Term {
        name: "Temperance",
        localized_name: "Ölçülülük",
        meaning_up: "denge, uyum, sabır, ılımlılık, birleştirme, şifa",
        meaning_rev: "dengesizlik, aşırılık, sabırsızlık, uyumsuzluk",
        desc: "Ölçülülük dengeyi, uyumu ve sabırlı yaklaşımı temsil eder.",
    },
    Term {
        name: "The Devil",
        localized_name: "Şeytan",
        meaning_up: "bağımlılık, kısıtlama, maddi takıntılar, tutsaklık, obsesyon",
        meaning_rev: "özgürleşme, kontrol geri alma, bağımlılıktan kurtulma, uyanış",
        desc: "Şeytan kartı bağımlılıkları, kısıtlamaları ve maddi takıntıları temsil eder.",
    },
    Term {
        name: "The Tower",
        localized_name: "Kule",
        meaning_up: "ani değişim, yıkım, aydınlanma, gerçeğin ortaya çıkması, şok",
        meaning_rev: "kişisel dönüşüm, kaçınılan felaket, iç değişim, direnç",
        desc: "Kule ani değişimleri, yıkımları ve gerçeğin ortaya çıkmasını temsil eder.",
    },
    Term {
        name: "The Star",
        localized_name: "Yıldız",
        meaning_up: "umut, ilham, ruhsal rehberlik, yenileme, iyileşme, barış",
        meaning_rev: "umutsuzluk, inançsızlık, ruhsal bağlantı kaybı, hayal kırıklığı",
        desc: "Yıldız umut, ilham ve ruhsal rehberliği temsil eder.",
    },
    Term {
        name: "The Moon",
        localized_name: "Ay",
        meaning_up: "illüzyon, korku, bilinçaltı, sezgi, belirsizlik, gizem",
        meaning_rev: "gerçeğin ortaya çıkması, korkuların aşılması, netlik, aydınlanma",
        desc: "Ay kartı illüzyonları, korkuları ve bilinçaltı mesajları temsil eder.",
    },
    Term {
        name: "The Sun",
        localized_name: "Güneş",
        meaning_up: "neşe, başarı, canlılık, pozitiflik, aydınlanma, mutluluk",
        meaning_rev: "geçici bulutlar, gecikmiş mutluluk, iç neşe, gölgeli dönem",
        desc: "Güneş neşeyi, başarıyı, canlılığı ve pozitifliği temsil eder.",
    },
    Term {
        name: "Judgement",
        localized_name: "Mahkeme",
        meaning_up: "yargı, yeniden doğuş, iç çağrı, affetme, uyanış",
        meaning_rev: "kendini yargılama, geçmişte takılma, çağrıyı kaçırma, pişmanlık",
        desc: "Mahkeme yargıyı, yeniden doğuşu ve iç çağrıyı temsil eder.",
    },
    Term {
        name: "The World",
        localized_name: "Dünya",
        meaning_up: "tamamlanma, başarı, seyahat, dünya bilinci, bütünlük",
        meaning_rev: "eksik tamamlanma, hedeflere ulaşamama, gecikme, engeller",
        desc: "Dünya kartı tamamlanmayı, başarıyı ve dünya bilincini temsil eder.",
    },
    // Wands
    Term {
        name: "Ace of Wands",
        localized_name: "Değnekler Ası",
        meaning_up: "yeni başlangıç, yaratıcılık, ilham, enerji, potansiyel",
        meaning_rev: "gecikme, yaratıcılık eksikliği, motivasyon kaybı",
        desc: "Değnekler Ası yeni projelerin ve yaratıcı enerjinin başlangıcını temsil eder.",
    },
    Term {
        name: "Two of Wands",
        localized_name: "İki Değnek",
        meaning_up: "planlama, gelecek planları, kişisel güç, kontrol",
        meaning_rev: "plansızlık, korku, kontrol kaybı",
        desc: "İki Değnek gelecek planlarını ve kişisel gücü temsil eder.",
    },
    Term {
        name: "Three of Wands",
        localized_name: "Üç Değnek",
        meaning_up: "genişleme, öngörü, denizaşırı fırsatlar, liderlik",
        meaning_rev: "gecikme, engeller, planlarda aksaklık",
        desc: "Üç Değnek genişleme ve uzun vadeli planları temsil eder.",
    },
    Term {
        name: "Four of Wands",
        localized_name: "Dört Değnek",
        meaning_up: "kutlama, ev, topluluk, istikrar, başarı",
        meaning_rev: "ev sorunları, istikrarsızlık, gecikmiş kutlama",
        desc: "Dört Değnek ev, aile ve kutlamaları temsil eder.",
    },
    Term {
        name: "Five of Wands",
        localized_name: "Beş Değnek",
        meaning_up: "çatışma, rekabet, anlaşmazlık, mücadele",
        meaning_rev: "çatışmadan kaçınma, iç çatışma, uyum",
        desc: "Beş Değnek rekabet ve çatışmaları temsil eder.",
    },
    Term {
        name: "Six of Wands",
        localized_name: "Altı Değnek",
        meaning_up: "zafer, tanınma, başarı, liderlik, gurur",
        meaning_rev: "başarısızlık, tanınmama, ego sorunları",
        desc: "Altı Değnek zafer ve tanınmayı temsil eder.",
    },
    Term {
        name: "Seven of Wands",
        localized_name: "Yedi Değnek",
        meaning_up: "savunma, meydan okuma, sebat, kararlılık",
        meaning_rev: "teslim olma, güvensizlik, ezilme",
        desc: "Yedi Değnek savunma ve kararlılığı temsil eder.",
    },
    Term {
        name: "Eight of Wands",
        localized_name: "Sekiz Değnek",
        meaning_up: "hız, hareket, ilerleme, haber, seyahat",
        meaning_rev: "gecikme, sabırsızlık, engeller",
        desc: "Sekiz Değnek hızlı gelişmeleri ve hareketi temsil eder.",
    },
    Term {
        name: "Nine of Wands",
        localized_name: "Dokuz Değnek",
        meaning_up: "dayanıklılık, sebat, savunma, son çaba",
        meaning_rev: "tükenmişlik, paranoya, pes etme",
        desc: "Dokuz Değnek dayanıklılık ve son çabayı temsil eder.",
    },
    Term {
        name: "Ten of Wands",
        localized_name: "On Değnek",
        meaning_up: "yük, sorumluluk, tükenmişlik, başarı yakın",
        meaning_rev: "yükten kurtulma, sorumluluk reddi, tükenmişlik",
        desc: "On Değnek ağır yükleri ve sorumluluğu temsil eder.",
    },
    Term {
        name: "Page of Wands",
        localized_name: "Değnekler Prensi",
        meaning_up: "coşku, keşif, özgürlük, mesaj",
        meaning_rev: "sabırsızlık, plansızlık, kötü haber",
        desc: "Değnekler Prensi coşku ve keşfi temsil eder.",
    },
    Term {
        name: "Knight of Wands",
        localized_name: "Değnekler Şövalyesi",
        meaning_up: "macera, dürtüsellik, enerji, cesaret",
        meaning_rev: "düşüncesizlik, sabırsızlık, saldırganlık",
        desc: "Değnekler Şövalyesi macera ve dürtüselliği temsil eder.",
    },
    Term {
        name: "Queen of Wands",
        localized_name: "Değnekler Kraliçesi",
        meaning_up: "güven, kararlılık, canlılık, bağımsızlık",
        meaning_rev: "kıskançlık, güvensizlik, bencillik",
        desc: "Değnekler Kraliçesi güven ve kararlılığı temsil eder.",
    },
    Term {
        name: "King of Wands",
        localized_name: "Değnekler Kralı",
        meaning_up: "liderlik, vizyon, girişimcilik, karizma",
        meaning_rev: "zorbalık, sabırsızlık, ego",
        desc: "Değnekler Kralı liderlik ve vizyonu temsil eder.",
    },
    // Cups
    Term {
        name: "Ace of Cups",
        localized_name: "Kupalar Ası",
        meaning_up: "yeni aşk, duygusal başlangıç, sezgi, ruhsal uyanış",
        meaning_rev: "duygusal blokaj, aşk kaybı, boşluk",
        desc: "Kupalar Ası yeni duygusal başlangıçları temsil eder.",
    },
    Term {
        name: "Two of Cups",
        localized_name: "İki Kupa",
        meaning_up: "aşk, ortaklık, birlik, uyum, bağlantı",
        meaning_rev: "ayrılık, uyumsuzluk, dengesizlik",
        desc: "İki Kupa aşk ve ortaklığı temsil eder.",
    },
    Term {
        name: "Three of Cups",
        localized_name: "Üç Kupa",
        meaning_up: "dostluk, kutlama, topluluk, neşe, paylaşım",
        meaning_rev: "yalnızlık, dedikodu, grup çatışması",
        desc: "Üç Kupa dostluk ve kutlamaları temsil eder.",
    },
    Term {
        name: "Four of Cups",
        localized_name: "Dört Kupa",
        meaning_up: "kayıtsızlık, meditasyon, yeniden değerlendirme",
        meaning_rev: "motivasyon, yeni fırsatlar, uyanış",
        desc: "Dört Kupa kayıtsızlık ve iç gözlemi temsil eder.",
    },
    Term {
        name: "Five of Cups",
        localized_name: "Beş Kupa",
        meaning_up: "kayıp, yas, hayal kırıklığı, pişmanlık",
        meaning_rev: "iyileşme, affetme, ileriye bakma",
        desc: "Beş Kupa kayıp ve yas sürecini temsil eder.",
    },
    Term {
        name: "Six of Cups",
        localized_name: "Altı Kupa",
        meaning_up: "nostalji, çocukluk, masumiyet, geçmiş",
        meaning_rev: "geçmişte takılma, çocuksuluk, gerçekçi olmama",
        desc: "Altı Kupa nostalji ve çocukluk anılarını temsil eder.",
    },
    Term {
        name: "Seven of Cups",
        localized_name: "Yedi Kupa",
        meaning_up: "seçenekler, hayal, illüzyon, kararsızlık",
        meaning_rev: "netlik, odaklanma, gerçekçilik",
        desc: "Yedi Kupa seçenekler ve hayalleri temsil eder.",
    },
    Term {
        name: "Eight of Cups",
        localized_name: "Sekiz Kupa",
        meaning_up: "terk etme, arayış, hayal kırıklığı, yolculuk",
        meaning_rev: "korku, kaçınma, terk etmeme",
        desc: "Sekiz Kupa terk etme ve arayışı temsil eder.",
    },
    Term {
        name: "Nine of Cups",
        localized_name: "Dokuz Kupa",
        meaning_up: "memnuniyet, mutluluk, başarı, tatmin",
        meaning_rev: "açgözlülük, tatminsizlik, yüzeysellik",
        desc: "Dokuz Kupa memnuniyet ve mutluluğu temsil eder.",
    },
    Term {
        name: "Ten of Cups",
        localized_name: "On Kupa",
        meaning_up: "aile mutluluğu, uyum, duygusal tatmin",
        meaning_rev: "aile çatışması, değer çatışması, kopukluk",
        desc: "On Kupa aile mutluluğu ve uyumu temsil eder.",
    },
    Term {
        name: "Page of Cups",
        localized_name: "Kupalar Prensi",
        meaning_up: "yaratıcılık, sezgi, duygusal mesaj, sanat",
        meaning_rev: "duygusal dengesizlik, yaratıcılık eksikliği",
        desc: "Kupalar Prensi yaratıcılık ve sezgiyi temsil eder.",
    },
    Term {
        name: "Knight of Cups",
        localized_name: "Kupalar Şövalyesi",
        meaning_up: "romantizm, charme, sanat, duygusal arayış",
        meaning_rev: "ruh hali değişkenliği, gerçekçi olmama",
        desc: "Kupalar Şövalyesi romantizm ve charme'ı temsil eder.",
    },
    Term {
        name: "Queen of Cups",
        localized_name: "Kupalar Kraliçesi",
        meaning_up: "empati, sezgi, duygusal zeka, şefkat",
        meaning_rev: "duygusal dengesizlik, bağımlılık, manipülasyon",
        desc: "Kupalar Kraliçesi empati ve sezgiyi temsil eder.",
    },
    Term {
        name: "King of Cups",
        localized_name: "Kupalar Kralı",
        meaning_up: "duygusal denge, şefkat, diplomasi, bilgelik",
        meaning_rev: "duygusal manipülasyon, ruh hali değişkenliği",
        desc: "Kupalar Kralı duygusal denge ve bilgeliği temsil eder.",
    },
    // Swords
    Term {
        name: "Ace of Swords",
        localized_name: "Kılıçlar Ası",
        meaning_up: "yeni fikirler, netlik, gerçek, zihinsel güç",
        meaning_rev: "karışıklık, zihinsel blokaj, yanlış bilgi",
        desc: "Kılıçlar Ası yeni fikirler ve zihinsel netliği temsil eder.",
    },
    Term {
        name: "Two of Swords",
        localized_name: "İki Kılıç",
        meaning_up: "kararsızlık, denge, zor seçim, çıkmaz",
        meaning_rev: "karar verme, netlik, çözüm",
        desc: "İki Kılıç kararsızlık ve zor seçimleri temsil eder.",
    },
    Term {
        name: "Three of Swords",
        localized_name: "Üç Kılıç",
        meaning_up: "kalp kırıklığı, acı, yas, ayrılık",
        meaning_rev: "iyileşme, affetme, acıdan kurtulma",
        desc: "Üç Kılıç kalp kırıklığı ve acıyı temsil eder.",
    },
    Term {
        name: "Four of Swords",
        localized_name: "Dört Kılıç",
        meaning_up: "dinlenme, meditasyon, iyileşme, barış",
        meaning_rev: "huzursuzluk, uykusuzluk, stres",
        desc: "Dört Kılıç dinlenme ve iyileşmeyi temsil eder.",
    },
    Term {
        name: "Five of Swords",
        localized_name: "Beş Kılıç",
        meaning_up: "çatışma, yenilgi, haksızlık, ego",
        meaning_rev: "barış yapma, affetme, ders alma",
        desc: "Beş Kılıç çatışma ve yenilgiyi temsil eder.",
    },
    Term {
        name: "Six of Swords",
        localized_name: "Altı Kılıç",
        meaning_up: "geçiş, seyahat, iyileşme, rehberlik",
        meaning_rev: "takılıp kalma, direniş, geçmişe bağlılık",
        desc: "Altı Kılıç geçiş ve iyileşmeyi temsil eder.",
    },
    Term {
        name: "Seven of Swords",
        localized_name: "Yedi Kılıç",
        meaning_up: "aldatma, hırsızlık, strateji, kaçış",
        meaning_rev: "dürüstlük, suçluluk, yakalanma",
        desc: "Yedi Kılıç aldatma ve stratejiyi temsil eder.",
    },
    Term {
        name: "Eight of Swords",
        localized_name: "Sekiz Kılıç",
        meaning_up: "kısıtlama, korku, zihinsel hapishane",
        meaning_rev: "özgürleşme, güçlenme, korkuları aşma",
        desc: "Sekiz Kılıç kısıtlama ve korkuları temsil eder.",
    },
    Term {
        name: "Nine of Swords",
        localized_name: "Dokuz Kılıç",
        meaning_up: "kaygı, korku, kabus, endişe",
        meaning_rev: "iyileşme, umut, korkuları aşma",
        desc: "Dokuz Kılıç kaygı ve korkuları temsil eder.",
    },
    Term {
        name: "Ten of Swords",
        localized_name: "On Kılıç",
        meaning_up: "son, yenilgi, ihanet, çöküş",
        meaning_rev: "iyileşme, yeniden başlama, umut",
        desc: "On Kılıç son ve yenilgiyi temsil eder.",
    },
    Term {
        name: "Page of Swords",
        localized_name: "Kılıçlar Prensi",
        meaning_up: "merak, öğrenme, haber, zihinsel enerji",
        meaning_rev: "dedikodu, kötü haber, zihinsel karışıklık",
        desc: "Kılıçlar Prensi merak ve öğrenmeyi temsil eder.",
    },
    Term {
        name: "Knight of Swords",
        localized_name: "Kılıçlar Şövalyesi",
        meaning_up: "hız, kararlılık, cesaret, dürtüsellik",
        meaning_rev: "düşüncesizlik, saldırganlık, sabırsızlık",
        desc: "Kılıçlar Şövalyesi hız ve kararlılığı temsil eder.",
    },
    Term {
        name: "Queen of Swords",
        localized_name: "Kılıçlar Kraliçesi",
        meaning_up: "zeka, bağımsızlık, netlik, objektiflik",
        meaning_rev: "soğukluk, acımasızlık, kıskançlık",
        desc: "Kılıçlar Kraliçesi zeka ve bağımsızlığı temsil eder.",
    },
    Term {
        name: "King of Swords",
        localized_name: "Kılıçlar Kralı",
        meaning_up: "otorite, zeka, adalet, liderlik",
        meaning_rev: "zorbalık, manipülasyon, kötü yargı",
        desc: "Kılıçlar Kralı otorite ve zekayı temsil eder.",
    },
    // Pentacles
    Term {
        name: "Ace of Pentacles",
        localized_name: "Pentagramlar Ası",
        meaning_up: "yeni fırsat, bolluk, maddi başlangıç, potansiyel",
        meaning_rev: "kaçırılan fırsat, maddi kayıp, plansızlık",
        desc: "Pentagramlar Ası yeni maddi fırsatları temsil eder.",
    },
    Term {
        name: "Two of Pentacles",
        localized_name: "İki Pentagram",
        meaning_up: "denge, çok görevlilik, esneklik, değişim",
        meaning_rev: "dengesizlik, stres, öncelik karmaşası",
        desc: "İki Pentagram denge ve esnekliği temsil eder.",
    },
    Term {
        name: "Three of Pentacles",
        localized_name: "Üç Pentagram",
        meaning_up: "işbirliği, takım çalışması, beceri, öğrenme",
        meaning_rev: "çatışma, beceri eksikliği, işbirliği sorunu",
        desc: "Üç Pentagram işbirliği ve beceriyi temsil eder.",
    },
    Term {
        name: "Four of Pentacles",
        localized_name: "Dört Pentagram",
        meaning_up: "güvenlik, kontrol, cimrilik, koruma",
        meaning_rev: "cömertlik, risk alma, kontrol kaybı",
        desc: "Dört Pentagram güvenlik ve kontrolü temsil eder.",
    },
    Term {
        name: "Five of Pentacles",
        localized_name: "Beş Pentagram",
        meaning_up: "yoksulluk, dışlanma, maddi kayıp, zorluk",
        meaning_rev: "iyileşme, yardım, maddi düzelme",
        desc: "Beş Pentagram maddi zorlukları temsil eder.",
    },
    Term {
        name: "Six of Pentacles",
        localized_name: "Altı Pentagram",
        meaning_up: "cömertlik, paylaşım, yardım, denge",
        meaning_rev: "bencillik, borç, dengesizlik",
        desc: "Altı Pentagram cömertlik ve paylaşımı temsil eder.",
    },
    Term {
        name: "Seven of Pentacles",
        localized_name: "Yedi Pentagram",
        meaning_up: "sabır, değerlendirme, yatırım, bekleme",
        meaning_rev: "sabırsızlık, kötü yatırım, hayal kırıklığı",
        desc: "Yedi Pentagram sabır ve değerlendirmeyi temsil eder.",
    },
    Term {
        name: "Eight of Pentacles",
        localized_name: "Sekiz Pentagram",
        meaning_up: "ustalık, çalışkanlık, beceri geliştirme",
        meaning_rev: "tembellik, beceri eksikliği, kalitesizlik",
        desc: "Sekiz Pentagram ustalık ve çalışkanlığı temsil eder.",
    },
    Term {
        name: "Nine of Pentacles",
        localized_name: "Dokuz Pentagram",
        meaning_up: "bağımsızlık, lüks, başarı, tatmin",
        meaning_rev: "maddi sorunlar, bağımlılık, tatminsizlik",
        desc: "Dokuz Pentagram bağımsızlık ve lüksü temsil eder.",
    },
    Term {
        name: "Ten of Pentacles",
        localized_name: "On Pentagram",
        meaning_up: "aile serveti, miras, güvenlik, gelenek",
        meaning_rev: "maddi kayıp, aile çatışması, istikrarsızlık",
        desc: "On Pentagram aile serveti ve güvenliği temsil eder.",
    },
    Term {
        name: "Page of Pentacles",
        localized_name: "Pentagramlar Prensi",
        meaning_up: "öğrenme, yeni proje, pratiklik, çalışkanlık",
        meaning_rev: "tembellik, plansızlık, odaklanma eksikliği",
        desc: "Pentagramlar Prensi öğrenme ve pratikliği temsil eder.",
    },
    Term {
        name: "Knight of Pentacles",
        localized_name: "Pentagramlar Şövalyesi",
        meaning_up: "çalışkanlık, güvenilirlik, sabır, kararlılık",
        meaning_rev: "tembellik, sıkıcılık, ilerleme eksikliği",
        desc: "Pentagramlar Şövalyesi çalışkanlık ve güvenilirliği temsil eder.",
    },
    Term {
        name: "Queen of Pentacles",
        localized_name: "Pentagramlar Kraliçesi",
        meaning_up: "besleyicilik, pratiklik, güvenlik, bolluk",
        meaning_rev: "ihmal, maddi sorunlar, dengesizlik",
        desc: "Pentagramlar Kraliçesi besleyicilik ve güvenliği temsil eder.",
    },
    Term {
        name: "King of Pentacles",
        localized_name: "Pentagramlar Kralı",
        meaning_up: "maddi başarı, güvenlik, cömertlik, liderlik",
        meaning_rev: "açgözlülük, maddi obsesyon, güvensizlik",
        desc: "Pentagramlar Kralı maddi başarı ve güvenliği temsil eder.",
    },
];
