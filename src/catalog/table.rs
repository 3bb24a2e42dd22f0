/// Builtin short-code → emoji pairs, in the order shown for an empty query.
pub(super) const EMOJI: &[(&str, &str)] = &[
	// faces
	("smile", "🙂"),
	("grinning", "😀"),
	("smiley", "😃"),
	("grin", "😁"),
	("laughing", "😆"),
	("sweat_smile", "😅"),
	("rofl", "🤣"),
	("joy", "😂"),
	("upside_down_face", "🙃"),
	("wink", "😉"),
	("blush", "😊"),
	("innocent", "😇"),
	("smiling_face_with_hearts", "🥰"),
	("heart_eyes", "😍"),
	("star_struck", "🤩"),
	("kissing_heart", "😘"),
	("kissing", "😗"),
	("relaxed", "☺️"),
	("yum", "😋"),
	("stuck_out_tongue", "😛"),
	("stuck_out_tongue_winking_eye", "😜"),
	("zany_face", "🤪"),
	("money_mouth_face", "🤑"),
	("hugs", "🤗"),
	("hand_over_mouth", "🤭"),
	("shushing_face", "🤫"),
	("thinking", "🤔"),
	("zipper_mouth_face", "🤐"),
	("raised_eyebrow", "🤨"),
	("neutral_face", "😐"),
	("expressionless", "😑"),
	("no_mouth", "😶"),
	("smirk", "😏"),
	("unamused", "😒"),
	("roll_eyes", "🙄"),
	("grimacing", "😬"),
	("lying_face", "🤥"),
	("relieved", "😌"),
	("pensive", "😔"),
	("sleepy", "😪"),
	("drooling_face", "🤤"),
	("sleeping", "😴"),
	("mask", "😷"),
	("face_with_thermometer", "🤒"),
	("nauseated_face", "🤢"),
	("vomiting_face", "🤮"),
	("sneezing_face", "🤧"),
	("hot_face", "🥵"),
	("cold_face", "🥶"),
	("woozy_face", "🥴"),
	("dizzy_face", "😵"),
	("exploding_head", "🤯"),
	("cowboy_hat_face", "🤠"),
	("partying_face", "🥳"),
	("sunglasses", "😎"),
	("nerd_face", "🤓"),
	("monocle_face", "🧐"),
	("confused", "😕"),
	("worried", "😟"),
	("slightly_frowning_face", "🙁"),
	("frowning_face", "☹️"),
	("open_mouth", "😮"),
	("hushed", "😯"),
	("astonished", "😲"),
	("flushed", "😳"),
	("pleading_face", "🥺"),
	("frowning", "😦"),
	("anguished", "😧"),
	("fearful", "😨"),
	("cold_sweat", "😰"),
	("disappointed_relieved", "😥"),
	("cry", "😢"),
	("sob", "😭"),
	("scream", "😱"),
	("confounded", "😖"),
	("persevere", "😣"),
	("disappointed", "😞"),
	("sweat", "😓"),
	("weary", "😩"),
	("tired_face", "😫"),
	("yawning_face", "🥱"),
	("triumph", "😤"),
	("rage", "😡"),
	("angry", "😠"),
	("cursing_face", "🤬"),
	("smiling_imp", "😈"),
	("imp", "👿"),
	("skull", "💀"),
	("hankey", "💩"),
	("clown_face", "🤡"),
	("japanese_ogre", "👹"),
	("ghost", "👻"),
	("alien", "👽"),
	("space_invader", "👾"),
	("robot", "🤖"),
	// cats
	("smiley_cat", "😺"),
	("smile_cat", "😸"),
	("joy_cat", "😹"),
	("heart_eyes_cat", "😻"),
	("smirk_cat", "😼"),
	("scream_cat", "🙀"),
	("crying_cat_face", "😿"),
	("pouting_cat", "😾"),
	("see_no_evil", "🙈"),
	("hear_no_evil", "🙉"),
	("speak_no_evil", "🙊"),
	// hearts and symbols
	("kiss", "💋"),
	("love_letter", "💌"),
	("heart", "❤️"),
	("orange_heart", "🧡"),
	("yellow_heart", "💛"),
	("green_heart", "💚"),
	("blue_heart", "💙"),
	("purple_heart", "💜"),
	("black_heart", "🖤"),
	("white_heart", "🤍"),
	("broken_heart", "💔"),
	("two_hearts", "💕"),
	("sparkling_heart", "💖"),
	("heartbeat", "💓"),
	("revolving_hearts", "💞"),
	("hundred", "💯"),
	("anger", "💢"),
	("boom", "💥"),
	("dizzy", "💫"),
	("sweat_drops", "💦"),
	("dash", "💨"),
	("speech_balloon", "💬"),
	("thought_balloon", "💭"),
	("zzz", "💤"),
	// hands and people
	("wave", "👋"),
	("raised_back_of_hand", "🤚"),
	("raised_hand", "✋"),
	("vulcan_salute", "🖖"),
	("ok_hand", "👌"),
	("pinching_hand", "🤏"),
	("v", "✌️"),
	("crossed_fingers", "🤞"),
	("love_you_gesture", "🤟"),
	("metal", "🤘"),
	("call_me_hand", "🤙"),
	("point_left", "👈"),
	("point_right", "👉"),
	("point_up_2", "👆"),
	("point_down", "👇"),
	("point_up", "☝️"),
	("thumbsup", "👍"),
	("thumbsdown", "👎"),
	("fist", "✊"),
	("facepunch", "👊"),
	("clap", "👏"),
	("raised_hands", "🙌"),
	("open_hands", "👐"),
	("palms_up_together", "🤲"),
	("handshake", "🤝"),
	("pray", "🙏"),
	("writing_hand", "✍️"),
	("nail_care", "💅"),
	("selfie", "🤳"),
	("muscle", "💪"),
	("brain", "🧠"),
	("eyes", "👀"),
	("eye", "👁️"),
	("tongue", "👅"),
	("lips", "👄"),
	("baby", "👶"),
	("child", "🧒"),
	("boy", "👦"),
	("girl", "👧"),
	("adult", "🧑"),
	("man", "👨"),
	("woman", "👩"),
	("older_adult", "🧓"),
	("man_shrugging", "🤷‍♂️"),
	("woman_shrugging", "🤷‍♀️"),
	("facepalm", "🤦"),
	("technologist", "🧑‍💻"),
	("scientist", "🧑‍🔬"),
	("astronaut", "🧑‍🚀"),
	("ninja", "🥷"),
	("superhero", "🦸"),
	("mage", "🧙"),
	("zombie", "🧟"),
	("runner", "🏃"),
	("dancer", "💃"),
	("family", "👪"),
	// animals and nature
	("dog", "🐶"),
	("cat", "🐱"),
	("mouse", "🐭"),
	("hamster", "🐹"),
	("rabbit", "🐰"),
	("fox_face", "🦊"),
	("bear", "🐻"),
	("panda_face", "🐼"),
	("koala", "🐨"),
	("tiger", "🐯"),
	("lion", "🦁"),
	("cow", "🐮"),
	("pig", "🐷"),
	("frog", "🐸"),
	("monkey_face", "🐵"),
	("chicken", "🐔"),
	("penguin", "🐧"),
	("bird", "🐦"),
	("baby_chick", "🐤"),
	("duck", "🦆"),
	("eagle", "🦅"),
	("owl", "🦉"),
	("bat", "🦇"),
	("wolf", "🐺"),
	("boar", "🐗"),
	("horse", "🐴"),
	("unicorn", "🦄"),
	("bee", "🐝"),
	("bug", "🐛"),
	("butterfly", "🦋"),
	("snail", "🐌"),
	("beetle", "🐞"),
	("ant", "🐜"),
	("spider", "🕷️"),
	("scorpion", "🦂"),
	("turtle", "🐢"),
	("snake", "🐍"),
	("lizard", "🦎"),
	("t_rex", "🦖"),
	("sauropod", "🦕"),
	("octopus", "🐙"),
	("squid", "🦑"),
	("shrimp", "🦐"),
	("lobster", "🦞"),
	("crab", "🦀"),
	("blowfish", "🐡"),
	("tropical_fish", "🐠"),
	("fish", "🐟"),
	("dolphin", "🐬"),
	("whale", "🐳"),
	("shark", "🦈"),
	("crocodile", "🐊"),
	("elephant", "🐘"),
	("giraffe", "🦒"),
	("camel", "🐫"),
	("kangaroo", "🦘"),
	("sloth", "🦥"),
	("otter", "🦦"),
	("hedgehog", "🦔"),
	("bouquet", "💐"),
	("cherry_blossom", "🌸"),
	("rose", "🌹"),
	("sunflower", "🌻"),
	("tulip", "🌷"),
	("seedling", "🌱"),
	("evergreen_tree", "🌲"),
	("deciduous_tree", "🌳"),
	("palm_tree", "🌴"),
	("cactus", "🌵"),
	("herb", "🌿"),
	("four_leaf_clover", "🍀"),
	("maple_leaf", "🍁"),
	("fallen_leaf", "🍂"),
	("mushroom", "🍄"),
	// weather and sky
	("sunny", "☀️"),
	("partly_sunny", "⛅"),
	("cloud", "☁️"),
	("cloud_with_rain", "🌧️"),
	("zap", "⚡"),
	("snowflake", "❄️"),
	("snowman", "⛄"),
	("fire", "🔥"),
	("droplet", "💧"),
	("ocean", "🌊"),
	("rainbow", "🌈"),
	("star", "⭐"),
	("star2", "🌟"),
	("sparkles", "✨"),
	("crescent_moon", "🌙"),
	("full_moon", "🌕"),
	("earth_africa", "🌍"),
	("comet", "☄️"),
	// food and drink
	("apple", "🍎"),
	("green_apple", "🍏"),
	("pear", "🍐"),
	("tangerine", "🍊"),
	("lemon", "🍋"),
	("banana", "🍌"),
	("watermelon", "🍉"),
	("grapes", "🍇"),
	("strawberry", "🍓"),
	("cherries", "🍒"),
	("peach", "🍑"),
	("mango", "🥭"),
	("pineapple", "🍍"),
	("coconut", "🥥"),
	("kiwi_fruit", "🥝"),
	("tomato", "🍅"),
	("avocado", "🥑"),
	("eggplant", "🍆"),
	("potato", "🥔"),
	("carrot", "🥕"),
	("corn", "🌽"),
	("hot_pepper", "🌶️"),
	("broccoli", "🥦"),
	("garlic", "🧄"),
	("onion", "🧅"),
	("bread", "🍞"),
	("croissant", "🥐"),
	("cheese", "🧀"),
	("egg", "🥚"),
	("bacon", "🥓"),
	("pancakes", "🥞"),
	("hamburger", "🍔"),
	("fries", "🍟"),
	("pizza", "🍕"),
	("hotdog", "🌭"),
	("sandwich", "🥪"),
	("taco", "🌮"),
	("burrito", "🌯"),
	("spaghetti", "🍝"),
	("ramen", "🍜"),
	("sushi", "🍣"),
	("rice", "🍚"),
	("curry", "🍛"),
	("dumpling", "🥟"),
	("icecream", "🍦"),
	("doughnut", "🍩"),
	("cookie", "🍪"),
	("birthday", "🎂"),
	("cake", "🍰"),
	("chocolate_bar", "🍫"),
	("candy", "🍬"),
	("lollipop", "🍭"),
	("honey_pot", "🍯"),
	("coffee", "☕"),
	("tea", "🍵"),
	("beer", "🍺"),
	("beers", "🍻"),
	("wine_glass", "🍷"),
	("cocktail", "🍸"),
	("tropical_drink", "🍹"),
	("champagne", "🍾"),
	("milk_glass", "🥛"),
	// activities and objects
	("soccer", "⚽"),
	("basketball", "🏀"),
	("football", "🏈"),
	("baseball", "⚾"),
	("tennis", "🎾"),
	("volleyball", "🏐"),
	("8ball", "🎱"),
	("ping_pong", "🏓"),
	("trophy", "🏆"),
	("medal_sports", "🏅"),
	("dart", "🎯"),
	("video_game", "🎮"),
	("game_die", "🎲"),
	("jigsaw", "🧩"),
	("chess_pawn", "♟️"),
	("art", "🎨"),
	("guitar", "🎸"),
	("musical_note", "🎵"),
	("notes", "🎶"),
	("microphone", "🎤"),
	("headphones", "🎧"),
	("tada", "🎉"),
	("confetti_ball", "🎊"),
	("balloon", "🎈"),
	("gift", "🎁"),
	("ribbon", "🎀"),
	("christmas_tree", "🎄"),
	("jack_o_lantern", "🎃"),
	("fireworks", "🎆"),
	("crystal_ball", "🔮"),
	("gem", "💎"),
	("ring", "💍"),
	("crown", "👑"),
	("tophat", "🎩"),
	("eyeglasses", "👓"),
	("necktie", "👔"),
	("shirt", "👕"),
	("jeans", "👖"),
	("dress", "👗"),
	("bikini", "👙"),
	("handbag", "👜"),
	("athletic_shoe", "👟"),
	("iphone", "📱"),
	("computer", "💻"),
	("keyboard", "⌨️"),
	("desktop_computer", "🖥️"),
	("printer", "🖨️"),
	("computer_mouse", "🖱️"),
	("floppy_disk", "💾"),
	("cd", "💿"),
	("camera", "📷"),
	("movie_camera", "🎥"),
	("tv", "📺"),
	("radio", "📻"),
	("telephone", "☎️"),
	("battery", "🔋"),
	("electric_plug", "🔌"),
	("bulb", "💡"),
	("flashlight", "🔦"),
	("candle", "🕯️"),
	("book", "📖"),
	("books", "📚"),
	("notebook", "📓"),
	("memo", "📝"),
	("pencil2", "✏️"),
	("pen", "🖊️"),
	("paperclip", "📎"),
	("pushpin", "📌"),
	("scissors", "✂️"),
	("calendar", "📆"),
	("clipboard", "📋"),
	("file_folder", "📁"),
	("chart_with_upwards_trend", "📈"),
	("chart_with_downwards_trend", "📉"),
	("bar_chart", "📊"),
	("envelope", "✉️"),
	("email", "📧"),
	("inbox_tray", "📥"),
	("outbox_tray", "📤"),
	("package", "📦"),
	("label", "🏷️"),
	("bookmark", "🔖"),
	("lock", "🔒"),
	("unlock", "🔓"),
	("key", "🔑"),
	("hammer", "🔨"),
	("wrench", "🔧"),
	("gear", "⚙️"),
	("nut_and_bolt", "🔩"),
	("link", "🔗"),
	("toolbox", "🧰"),
	("magnet", "🧲"),
	("test_tube", "🧪"),
	("microscope", "🔬"),
	("telescope", "🔭"),
	("satellite", "📡"),
	("syringe", "💉"),
	("pill", "💊"),
	("door", "🚪"),
	("bed", "🛏️"),
	("toilet", "🚽"),
	("broom", "🧹"),
	("shopping_cart", "🛒"),
	("moneybag", "💰"),
	("dollar", "💵"),
	("credit_card", "💳"),
	("hourglass", "⌛"),
	("alarm_clock", "⏰"),
	("stopwatch", "⏱️"),
	("bell", "🔔"),
	("no_bell", "🔕"),
	("loudspeaker", "📢"),
	("mag", "🔍"),
	// travel and places
	("car", "🚗"),
	("taxi", "🚕"),
	("bus", "🚌"),
	("ambulance", "🚑"),
	("fire_engine", "🚒"),
	("police_car", "🚓"),
	("truck", "🚚"),
	("tractor", "🚜"),
	("bike", "🚲"),
	("motorcycle", "🏍️"),
	("train", "🚆"),
	("metro", "🚇"),
	("airplane", "✈️"),
	("helicopter", "🚁"),
	("rocket", "🚀"),
	("flying_saucer", "🛸"),
	("boat", "⛵"),
	("ship", "🚢"),
	("anchor", "⚓"),
	("construction", "🚧"),
	("vertical_traffic_light", "🚦"),
	("world_map", "🗺️"),
	("mountain", "⛰️"),
	("volcano", "🌋"),
	("camping", "🏕️"),
	("beach_umbrella", "🏖️"),
	("desert", "🏜️"),
	("house", "🏠"),
	("office", "🏢"),
	("hospital", "🏥"),
	("school", "🏫"),
	("castle", "🏰"),
	("tent", "⛺"),
	("statue_of_liberty", "🗽"),
	("moyai", "🗿"),
	// signs
	("white_check_mark", "✅"),
	("heavy_check_mark", "✔️"),
	("x", "❌"),
	("negative_squared_cross_mark", "❎"),
	("warning", "⚠️"),
	("no_entry", "⛔"),
	("no_entry_sign", "🚫"),
	("stop_sign", "🛑"),
	("question", "❓"),
	("exclamation", "❗"),
	("bangbang", "‼️"),
	("interrobang", "⁉️"),
	("heavy_plus_sign", "➕"),
	("heavy_minus_sign", "➖"),
	("heavy_division_sign", "➗"),
	("infinity", "♾️"),
	("recycle", "♻️"),
	("copyright", "©️"),
	("registered", "®️"),
	("tm", "™️"),
	("information_source", "ℹ️"),
	("new", "🆕"),
	("free", "🆓"),
	("up", "🆙"),
	("cool", "🆒"),
	("ok", "🆗"),
	("sos", "🆘"),
	("red_circle", "🔴"),
	("large_blue_circle", "🔵"),
	("black_circle", "⚫"),
	("white_circle", "⚪"),
	("arrow_up", "⬆️"),
	("arrow_down", "⬇️"),
	("arrow_left", "⬅️"),
	("arrow_right", "➡️"),
	("arrows_counterclockwise", "🔄"),
	("repeat", "🔁"),
	("fast_forward", "⏩"),
	("rewind", "⏪"),
	("pause_button", "⏸️"),
	("stop_button", "⏹️"),
	("record_button", "⏺️"),
	("one", "1️⃣"),
	("two", "2️⃣"),
	("three", "3️⃣"),
	("keycap_ten", "🔟"),
	("hash", "#️⃣"),
	("asterisk", "*️⃣"),
	// flags
	("checkered_flag", "🏁"),
	("triangular_flag_on_post", "🚩"),
	("white_flag", "🏳️"),
	("rainbow_flag", "🏳️‍🌈"),
	("pirate_flag", "🏴‍☠️"),
	("jp", "🇯🇵"),
	("kr", "🇰🇷"),
	("de", "🇩🇪"),
	("cn", "🇨🇳"),
	("us", "🇺🇸"),
	("fr", "🇫🇷"),
	("es", "🇪🇸"),
	("it", "🇮🇹"),
	("ru", "🇷🇺"),
	("gb", "🇬🇧"),
];
